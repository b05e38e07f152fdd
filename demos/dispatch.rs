use decisions::RuleTableBuilder;

type Render = fn(&str) -> String;

fn main() {
    // A table of functions, each applied to the same input it was chosen for.
    let render = RuleTableBuilder::<str, Render>::new()
        .reply(|_| "<empty>".to_owned())
        .when(str::is_empty)
        .reply(|s| s.to_uppercase())
        .when(|s| s.ends_with('!'))
        .reply(|s| format!("#{}", s.trim_start_matches('#')))
        .when(|s| s.starts_with('#'))
        .finalize_with_default(str::to_owned);

    for input in ["", "hello!", "##tag", "plain"] {
        match render.dispatch(input) {
            Ok(out) => println!("{input:?} -> {out}"),
            Err(never) => match never {},
        }
    }
}
