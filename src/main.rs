fn main() {
    if let Err(err) = csv2vcard::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
