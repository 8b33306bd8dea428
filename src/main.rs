fn main() {
    byline::run()
}
