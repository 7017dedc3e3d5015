use std::process;

fn main() {
    match md2docx_cli::run() {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("md2docx error: {err:?}");
            process::exit(1);
        }
    }
}
