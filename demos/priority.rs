use decisions::{DecisionError, RuleTableBuilder};

#[derive(Debug)]
struct Request {
    user: String,
    banned: bool,
    age: u32,
}

fn main() {
    // Deny-before-allow: the ban check is added first, so it wins
    // even when the user would otherwise be allowed.
    let access = RuleTableBuilder::new()
        .rule(|r: &Request| r.banned, "denied")
        .rule(|r: &Request| r.age >= 18, "allowed")
        .finalize_with_failure(DecisionError::no_match::<Request>);

    let requests = [
        Request { user: "mallory".into(), banned: true, age: 30 },
        Request { user: "alice".into(), banned: false, age: 25 },
        Request { user: "bob".into(), banned: false, age: 15 },
    ];

    for request in &requests {
        match access.evaluate(request) {
            Ok(verdict) => println!("{}: {verdict}", request.user),
            Err(err) => println!("{}: {err}", request.user),
        }
    }
}
