pub trait GridView {
    type Cell: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn stride(&self) -> usize;

    fn row(&self, y: usize) -> &[Self::Cell];

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { grid: self, y: 0 }
    }

    fn cell_count(&self) -> usize {
        self.width() * self.height()
    }
}

pub trait GridViewMut: GridView {
    fn row_mut(&mut self, y: usize) -> &mut [Self::Cell];
}

pub struct Rows<'a, G: ?Sized + GridView> {
    grid: &'a G,
    y: usize,
}

impl<'a, G: GridView> Iterator for Rows<'a, G> {
    type Item = &'a [G::Cell];

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.grid.height() {
            return None;
        }
        let y = self.y;
        self.y += 1;
        Some(self.grid.row(y))
    }
}
