use prop_rs::formula::Formula;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let p = Formula::var("p");
    let q = Formula::var("q");
    let r = Formula::var("r");
    let s = Formula::var("s");

    // f = (p -> (!q | s)) & (!s -> r)
    let f = p.implies(&q.not_().or(&s)).and(&s.not_().implies(&r));
    println!("f = {}", f);
    println!("arity = {}", f.arity());

    let table = f.table()?;
    println!("{}", table);

    Ok(())
}
