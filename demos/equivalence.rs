use clap::Parser;

use prop_rs::formula::Formula;

#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Also print the truth table behind each verdict.
    #[clap(long)]
    verbose: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Cli::parse();

    let p = Formula::var("p");
    let q = Formula::var("q");
    let r = Formula::var("r");

    // main = !(p -> r) -> !q, checked against five candidate forms.
    let main = p.implies(&r).not_().implies(&q.not_());
    let a = q.implies(&p.implies(&r));
    let b = p.implies(&r).and(&q.not_());
    let c = p.implies(&r).or(&q);
    let d = p.implies(&r).or(&q.not_());
    let e = q.not_().implies(&p.implies(&r).not_());

    println!("main = {}", main);
    for candidate in [&a, &b, &c, &d, &e] {
        let verdict = main.is_equivalent(candidate)?;
        println!("main <=> {} : {}", candidate, verdict);
        if args.verbose {
            let mut table = main.table()?;
            table.add_column(candidate)?;
            println!("{}", table);
        }
    }

    Ok(())
}
