use cmdln::{List, Param, ParamSet};

fn main() {
    let mut items: Vec<u32> = Vec::default();

    let mut parser = ParamSet::new()
        .add(Param::list(List::new(&mut items), "item"))
        .build()
        .expect("The parameters should be configured correctly.");

    if let Err(error) = parser.parse_args(std::env::args().skip(1)) {
        eprintln!("{error}");
        std::process::exit(1);
    }

    drop(parser);
    let sum: u32 = items.iter().sum();
    println!("Sum: {sum}");
}
