fn main() {
    aila::term::main()
}
