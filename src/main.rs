fn main() {
    ayurakshak_lib::run()
}
