fn main() {
    cliplog::app::cli::run();
}
