fn main() {
    finz_frontend::start_app();
}
