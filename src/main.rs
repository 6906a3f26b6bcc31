use rofi_todo::cli::run;

fn main() {
    // Only setup and listing failures get here; command errors were already notified
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        let mut source = e.source();
        if source.is_some() {
            eprintln!("\nCaused by:");
            let mut indent = 1;
            while let Some(err) = source {
                eprintln!("{:indent$}  {}", "", err);
                source = err.source();
                indent += 1;
            }
        }
        std::process::exit(1);
    }
}
