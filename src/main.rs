fn main() {
    std::process::exit(svnrev::app::startup::startup());
}
