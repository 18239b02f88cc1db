/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard_u8(width: usize, height: usize, cell: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let cx = x / cell;
            let cy = y / cell;
            let val = if (cx + cy) & 1 == 0 { 32u8 } else { 220u8 };
            img[y * width + x] = val;
        }
    }
    img
}

/// Interleaved RGB samples: checkerboard in red, horizontal ramp in green,
/// constant blue.
pub fn rgb_test_pattern(width: usize, height: usize, cell: usize) -> Vec<u8> {
    let red = checkerboard_u8(width, height, cell);
    let mut samples = Vec::with_capacity(width * height * 3);
    for (i, &r) in red.iter().enumerate() {
        let x = i % width;
        samples.push(r);
        samples.push((x * 255 / (width - 1).max(1)) as u8);
        samples.push(90);
    }
    samples
}

/// Renders interleaved samples as a P3 document with a few comment lines and
/// uneven line breaks, the way hand-edited files tend to look.
pub fn to_p3_text(width: usize, height: usize, samples: &[u8]) -> String {
    let mut text = String::from("P3\n# synthetic test image\n# second comment line\n");
    text.push_str(&format!("{width} {height}\n255\n"));
    for (i, px) in samples.chunks(3).enumerate() {
        text.push_str(&format!("{} {} {}", px[0], px[1], px[2]));
        text.push(if i % 5 == 4 { '\n' } else { ' ' });
    }
    text.push('\n');
    text
}
