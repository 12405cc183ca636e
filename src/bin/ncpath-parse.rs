use std::{env, fs};
use ncpath::ast::Line;
use ncpath::parse::parse_program;

fn main() {
    let filename = env::args().nth(1).expect("file name required");
    let input = match fs::read_to_string(&filename) {
        Ok(input) => input,
        Err(e) => return eprintln!("Cannot read {}: {}", filename, e),
    };

    match parse_program(&input) {
        Err(e) => eprintln!("Parse error: {}", e),
        Ok(lines) => for words in &lines {
            println!("{}", Line(words));
        }
    }
}
