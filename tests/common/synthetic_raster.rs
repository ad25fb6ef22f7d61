use box_counting::raster::BinaryGrid;

/// Sierpinski carpet of side `3^depth`; tripling the box side divides the count by 8.
pub fn sierpinski_carpet(depth: u32) -> BinaryGrid {
    let side = 3usize.pow(depth);
    let mut grid = BinaryGrid::new(side, side);
    for y in 0..side {
        for x in 0..side {
            let (mut cx, mut cy) = (x, y);
            let mut on = true;
            while cx > 0 || cy > 0 {
                if cx % 3 == 1 && cy % 3 == 1 {
                    on = false;
                    break;
                }
                cx /= 3;
                cy /= 3;
            }
            grid.set(x, y, u8::from(on));
        }
    }
    grid
}

/// Filled disc of the given radius centred in a `width × height` grid.
pub fn disc(width: usize, height: usize, radius: f64) -> BinaryGrid {
    assert!(width > 0 && height > 0, "grid dimensions must be positive");
    let (cx, cy) = (width as f64 / 2.0, height as f64 / 2.0);
    let mut grid = BinaryGrid::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let dx = x as f64 + 0.5 - cx;
            let dy = y as f64 + 0.5 - cy;
            grid.set(x, y, u8::from(dx * dx + dy * dy <= radius * radius));
        }
    }
    grid
}
