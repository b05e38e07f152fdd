use decisions::RuleTableBuilder;

fn main() {
    // Define rules; earlier rules take priority
    let grade = RuleTableBuilder::new()
        .rule(|score: &u32| *score >= 90, 'A')
        .rule(|score: &u32| *score >= 80, 'B')
        .rule(|score: &u32| *score >= 70, 'C')
        .finalize_with_default('F');

    println!("{grade}");

    for score in [95, 85, 72, 40] {
        println!("score {score} -> grade {}", grade.apply(&score));
    }
}
