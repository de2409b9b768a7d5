use rand::rngs::OsRng;
use splash_naming::{name_bits, HostName};

fn main() {
    // Five independent names from the operating system's secure source
    for _ in 0..5 {
        let host = HostName::generate(&mut OsRng);
        println!("{host}");
    }
    println!("Entropy per name: {:.1} bits", name_bits());
}
