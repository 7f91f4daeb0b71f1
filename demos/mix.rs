use chromix::{Color, Mix, NamedColor};

fn main() {
    let mut mix = Mix::new();
    let red = mix.add_component("Red", Color::new(255, 0, 0));
    mix.add_component("Blue", Color::new(0, 0, 255));
    mix.increment(red).unwrap();

    let blend = mix.blend();
    println!("mixed = {}", blend.color);
    for share in &blend.shares {
        println!("  {} {:.1}%", share.name, share.percentage);
    }

    // Look for the ratios of the primaries that make up olive.
    let bases = [
        NamedColor::new("Red", Color::new(255, 0, 0)),
        NamedColor::new("Green", Color::new(0, 255, 0)),
        NamedColor::new("Blue", Color::new(0, 0, 255)),
    ];
    let outcome = mix.find_best_mix(Color::new(128, 128, 0), &bases).unwrap();
    println!(
        "best = {} after {} passes, distance {}",
        outcome.blend.color, outcome.passes, outcome.distance
    );

    println!("{:#?}", mix.to_variant("Olive"));
}
