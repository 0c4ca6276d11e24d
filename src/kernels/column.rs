//! Column kernel: one output column per call, unrolled dot products.

/// Compute column `j` of C = A * B.
///
/// `a` is m × k, `b` is k × n and `c` is m × n, all row-major. `bj` is a
/// caller-owned scratch buffer of length `k` that receives a copy of
/// column `j` of B, turning the strided column reads into sequential
/// ones. That copy is the performance trick here: B is stored row-major
/// but consumed column-wise.
///
/// The dot product is unrolled by 4, with the `k % 4` leftover handled
/// up front and a single scalar accumulator per row. The summation order
/// is fixed; strategies may distribute columns however they like but may
/// not reorder work within a column, so their outputs stay bit-identical.
///
/// The caller validates dimensions; this routine does not. It writes
/// nothing outside C's column `j`.
#[allow(clippy::too_many_arguments)]
pub fn compute_column(
    a: &[f32],
    b: &[f32],
    c: &mut [f32],
    m: usize,
    n: usize,
    k: usize,
    j: usize,
    bj: &mut [f32],
) {
    for p in 0..k {
        bj[p] = b[p * n + j];
    }
    let lead = k % 4;
    for i in 0..m {
        let ai = &a[i * k..(i + 1) * k];
        let mut cij = 0.0f32;
        for p in 0..lead {
            cij += ai[p] * bj[p];
        }
        let mut p = lead;
        while p < k {
            cij += ai[p] * bj[p];
            cij += ai[p + 1] * bj[p + 1];
            cij += ai[p + 2] * bj[p + 2];
            cij += ai[p + 3] * bj[p + 3];
            p += 4;
        }
        c[i * n + j] = cij;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Plain dot product in the same summation order as the kernel.
    fn expected_column(a: &[f32], b: &[f32], m: usize, n: usize, k: usize, j: usize) -> Vec<f32> {
        (0..m)
            .map(|i| (0..k).map(|p| a[i * k + p] * b[p * n + j]).sum())
            .collect()
    }

    #[test]
    fn computes_one_column() {
        let (m, n, k) = (3, 4, 5);
        let a: Vec<f32> = (0..m * k).map(|x| x as f32).collect();
        let b: Vec<f32> = (0..k * n).map(|x| (x % 7) as f32).collect();
        let mut c = vec![0.0; m * n];
        let mut bj = vec![0.0; k];

        compute_column(&a, &b, &mut c, m, n, k, 2, &mut bj);

        let want = expected_column(&a, &b, m, n, k, 2);
        for i in 0..m {
            assert_eq!(c[i * n + 2], want[i]);
        }
    }

    #[test]
    fn leaves_other_columns_untouched() {
        let (m, n, k) = (4, 3, 6);
        let a: Vec<f32> = (0..m * k).map(|x| (x % 5) as f32).collect();
        let b: Vec<f32> = (0..k * n).map(|x| (x % 3) as f32).collect();
        let mut c = vec![-1.0; m * n];
        let mut bj = vec![0.0; k];

        compute_column(&a, &b, &mut c, m, n, k, 1, &mut bj);

        for i in 0..m {
            assert_eq!(c[i * n], -1.0);
            assert_eq!(c[i * n + 2], -1.0);
            assert_ne!(c[i * n + 1], -1.0);
        }
    }

    #[test]
    fn handles_unroll_remainders() {
        // k values covering every k % 4 case, including k < 4.
        for k in [1, 2, 3, 4, 5, 6, 7, 8, 9] {
            let (m, n) = (3, 2);
            let a: Vec<f32> = (0..m * k).map(|x| (x as f32) * 0.5).collect();
            let b: Vec<f32> = (0..k * n).map(|x| (x as f32) * 0.25).collect();
            let mut c = vec![0.0; m * n];
            let mut bj = vec![0.0; k];

            for j in 0..n {
                compute_column(&a, &b, &mut c, m, n, k, j, &mut bj);
            }

            for j in 0..n {
                let want = expected_column(&a, &b, m, n, k, j);
                for i in 0..m {
                    assert_eq!(c[i * n + j], want[i], "k={k} i={i} j={j}");
                }
            }
        }
    }

    #[test]
    fn scratch_reuse_does_not_leak_between_columns() {
        let (m, n, k) = (2, 3, 4);
        let a: Vec<f32> = vec![1.0; m * k];
        let b: Vec<f32> = (0..k * n).map(|x| x as f32).collect();
        let mut c = vec![0.0; m * n];
        let mut bj = vec![9999.0; k];

        for j in 0..n {
            compute_column(&a, &b, &mut c, m, n, k, j, &mut bj);
        }

        for j in 0..n {
            let want = expected_column(&a, &b, m, n, k, j);
            for i in 0..m {
                assert_eq!(c[i * n + j], want[i]);
            }
        }
    }
}
