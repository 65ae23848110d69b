use contact_book::config::Config;

fn main() {
    contact_book::logging::init();

    if let Err(e) = contact_book::cli::run(&Config::default()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
