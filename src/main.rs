fn main() {
    appreg_resolver::app::cli::run();
}
