use chromix::{cmyk_to_rgb, rgb_to_cmyk, Color};

pub fn main() {
    // chocolate
    let color = Color::new(210, 105, 30);

    // 0, 50, 86, 18
    let cmyk = rgb_to_cmyk(color);

    // #D1691D, one off per channel from the percentages being rounded.
    let back = cmyk_to_rgb(cmyk);

    println!("{color} -> {cmyk:?} -> {back}");
    println!("hue = {:?}", color.hue());
}
