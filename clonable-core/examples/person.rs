//! Run with `cargo run -p clonable-core --example person`.

use clonable_core::prelude::*;
use std::rc::Rc;

#[derive(Clonable, Debug)]
#[clonable(default = deep)]
struct Person {
    name: String,
    age: u32,
    #[clone(strategy = shallow)]
    team: Rc<String>,
}

impl Person {
    fn describe(&self) -> String {
        format!("Person(name: {}, age: {}, team: {})", self.name, self.age, self.team)
    }
}

fn main() {
    let p = Person { name: "Xiaoli".to_string(), age: 20, team: Rc::new("core".to_string()) };
    let p2 = p.clone();

    println!("{}", p.describe());
    println!("{}", p2.describe());
    println!("team shared: {}", Rc::ptr_eq(&p.team, &p2.team));
}
