//! Scharr luminance gradient.
//!
//! - 3×3 Scharr kernel pair, normalized by 1/16 (`[3, 10, 3] / 16`
//!   smoothing times the `[1, 0, -1]` difference), so a unit step reads
//!   1.0 on the pixels either side of it.
//! - Border pixels read replicated edge values.
//! - The per-pixel response is `max(|gx|, |gy|)`, not the Euclidean norm.

use crate::field::Field;

type Kernel3 = [[f32; 3]; 3];

const SCHARR_KERNEL_X: Kernel3 = [
    [3.0 / 16.0, 0.0, -3.0 / 16.0],
    [10.0 / 16.0, 0.0, -10.0 / 16.0],
    [3.0 / 16.0, 0.0, -3.0 / 16.0],
];
const SCHARR_KERNEL_Y: Kernel3 = [
    [3.0 / 16.0, 10.0 / 16.0, 3.0 / 16.0],
    [0.0, 0.0, 0.0],
    [-3.0 / 16.0, -10.0 / 16.0, -3.0 / 16.0],
];

/// Horizontal and vertical Scharr responses.
#[derive(Debug, Clone)]
pub struct Grad {
    /// Response to the horizontal-derivative kernel
    pub gx: Field,
    /// Response to the vertical-derivative kernel
    pub gy: Field,
}

impl Grad {
    /// `max(|gx|, |gy|)` per pixel.
    pub fn dominant_magnitude(&self) -> Field {
        let data = self
            .gx
            .as_slice()
            .iter()
            .zip(self.gy.as_slice())
            .map(|(gx, gy)| gx.abs().max(gy.abs()))
            .collect();
        Field::from_vec(data, self.gx.width(), self.gx.height())
    }
}

/// Convolve `field` with the Scharr kernel pair.
pub fn scharr_gradients(field: &Field) -> Grad {
    let w = field.width();
    let h = field.height();
    let mut gx = Field::filled(w, h, 0.0);
    let mut gy = Field::filled(w, h, 0.0);

    if w == 0 || h == 0 {
        return Grad { gx, gy };
    }

    for y in 0..h {
        let y_idx = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
        let rows = [field.row(y_idx[0]), field.row(y_idx[1]), field.row(y_idx[2])];
        for x in 0..w {
            let x_idx = [x.saturating_sub(1), x, (x + 1).min(w - 1)];

            let mut sum_x = 0.0;
            let mut sum_y = 0.0;
            for (ky, row) in rows.iter().enumerate() {
                let kx_row = &SCHARR_KERNEL_X[ky];
                let ky_row = &SCHARR_KERNEL_Y[ky];
                sum_x += row[x_idx[0]] * kx_row[0]
                    + row[x_idx[1]] * kx_row[1]
                    + row[x_idx[2]] * kx_row[2];
                sum_y += row[x_idx[0]] * ky_row[0]
                    + row[x_idx[1]] * ky_row[1]
                    + row[x_idx[2]] * ky_row[2];
            }

            gx.set(x, y, sum_x);
            gy.set(x, y, sum_y);
        }
    }

    Grad { gx, gy }
}
