use decisions::RuleTableBuilder;

fn main() {
    let shipping = RuleTableBuilder::new()
        .rule(|kg: &f64| *kg <= 0.0, "invalid")
        .rule(|kg: &f64| *kg < 1.0, "letter")
        .rule(|kg: &f64| *kg < 20.0, "parcel")
        .finalize_with_default("freight");

    for weight in [0.4, 12.0, 250.0] {
        let report = shipping.evaluate_detailed(&weight);

        println!("{weight} kg: {report}");
        println!("  outcome: {:?}", report.outcome());
        println!("  matched rule: {:?}", report.matched());
        println!("  fallback used: {:?}", report.fallback_used());
        println!();
    }
}
