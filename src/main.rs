use std::{env, fs::read_to_string, path::PathBuf, time::Instant};

use lutin::{display_error, lexer::lexer::tokenize, parser::parser::parse};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        panic!("Incorrect arguments provided!");
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains('/') {
        file_path.split('/').last().unwrap()
    } else {
        file_path
    };

    let start = Instant::now();

    let file_contents = read_to_string(file_path).expect("Failed to read file!");

    let tokens = tokenize(file_contents, Some(String::from(file_name)));

    if tokens.is_err() {
        display_error(tokens.err().unwrap(), PathBuf::from(file_path));
        panic!()
    }

    println!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let ast = parse(tokens.unwrap());

    println!("Parsed in {:?}", parse_start.elapsed());

    match ast {
        Ok(ast) => println!("{}", pretty_print(format!("{:?}", ast))),
        Err(error) => {
            display_error(error, PathBuf::from(file_path));
            panic!()
        }
    }
}

/// Re-indents the one-line Debug output of the AST so nested nodes are
/// readable on the terminal.
fn pretty_print(string: String) -> String {
    let mut result = String::new();
    let mut indent = 0;
    let mut ignore_next_space = false;

    for c in string.chars() {
        match c {
            '{' | '(' | '[' => {
                indent += 1;
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                ignore_next_space = c == '{';
            }
            '}' | ')' | ']' => {
                indent -= 1;
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                result.push(c);
            }
            ',' => {
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                ignore_next_space = true;
            }
            ' ' if ignore_next_space => {
                ignore_next_space = false;
            }
            _ => result.push(c),
        }
    }

    result
}
