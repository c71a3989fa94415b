use vendor_prune::printer;

fn main() {
    if let Err(err) = vendor_prune::run() {
        printer::error(format!("error: {err}"));
        std::process::exit(1);
    }
}
