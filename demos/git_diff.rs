use cmdln::{List, Param, ParamSet, Separated};
use std::process::{exit, Command};

// Strip flags, which `cmdln` does not handle, keeping them for the `git` invocation.
fn split_flags(args: impl Iterator<Item = String>) -> (Vec<String>, Vec<String>) {
    args.partition(|arg| arg.starts_with('-') && arg != "--")
}

fn git_arguments(flags: &[String], commits: &[String], paths: &[String]) -> Vec<String> {
    let mut arguments = vec!["diff".to_string()];
    arguments.extend_from_slice(flags);
    arguments.extend_from_slice(commits);

    if !paths.is_empty() {
        arguments.push("--".to_string());
        arguments.extend_from_slice(paths);
    }

    arguments
}

fn main() {
    let (flags, tokens) = split_flags(std::env::args().skip(1));
    let mut commits: Vec<String> = Vec::default();
    let mut paths: Vec<String> = Vec::default();

    let mut parser = ParamSet::new()
        .add(Separated::new(
            Param::list(List::new(&mut commits), "commit").optional(),
        ))
        .add(Param::list(List::new(&mut paths), "path").optional())
        .build()
        .expect("The parameters should be configured correctly.");

    if let Err(error) = parser.parse_args(tokens) {
        eprintln!("{error}");
        exit(1);
    }

    drop(parser);
    let status = Command::new("git")
        .args(git_arguments(&flags, &commits, &paths))
        .status();

    match status {
        Ok(status) => exit(status.code().unwrap_or(1)),
        Err(error) => {
            eprintln!("Failed to run git: {error}");
            exit(1);
        }
    }
}
