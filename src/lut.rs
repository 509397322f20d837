/// Decimal text of every value `0..=255`, precomputed for row formatting.
#[derive(Clone, Debug)]
pub struct DecimalLut {
    text: [[u8; 3]; 256],
    len: [u8; 256],
}

impl DecimalLut {
    /// Build the table. Usable in `const` and `static` items.
    pub const fn new() -> Self {
        let mut text = [[0u8; 3]; 256];
        let mut len = [0u8; 256];
        let mut v = 0usize;
        while v < 256 {
            let (hundreds, tens, ones) = ((v / 100) as u8, (v / 10 % 10) as u8, (v % 10) as u8);
            if v >= 100 {
                text[v] = [b'0' + hundreds, b'0' + tens, b'0' + ones];
                len[v] = 3;
            } else if v >= 10 {
                text[v] = [b'0' + tens, b'0' + ones, 0];
                len[v] = 2;
            } else {
                text[v] = [b'0' + ones, 0, 0];
                len[v] = 1;
            }
            v += 1;
        }
        Self { text, len }
    }

    /// Unpadded decimal text for `value`.
    #[inline]
    pub fn get(&self, value: u8) -> &[u8] {
        let i = usize::from(value);
        &self.text[i][..usize::from(self.len[i])]
    }
}

impl Default for DecimalLut {
    fn default() -> Self {
        Self::new()
    }
}
