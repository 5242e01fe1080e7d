fn main() {
    dbconf::app::cli::run();
}
