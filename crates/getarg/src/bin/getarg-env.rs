//! Print the process-wide store built from this process's own arguments.

fn main() {
    let store = getarg::global::init();
    for (key, value) in store.iter() {
        println!("{key}={value}");
    }
    for token in store.rest() {
        println!("rest: {token}");
    }
}
