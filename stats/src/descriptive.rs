use serde::Serialize;

pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Sample variance with Bessel's correction. Zero below two values.
pub fn sample_variance(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }
    let m = mean(data);
    data.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (data.len() - 1) as f64
}

pub fn sample_std_dev(data: &[f64]) -> f64 {
    sample_variance(data).sqrt()
}

/// Smallest value of a finite sample. Zero when empty.
pub fn min(data: &[f64]) -> f64 {
    data.iter().copied().reduce(f64::min).unwrap_or(0.0)
}

/// Largest value of a finite sample. Zero when empty.
pub fn max(data: &[f64]) -> f64 {
    data.iter().copied().reduce(f64::max).unwrap_or(0.0)
}

pub fn range(data: &[f64]) -> f64 {
    max(data) - min(data)
}

/// Descriptive summary of one sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub n: usize,
    pub mean: f64,
    pub sd: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
}

pub fn summarize(data: &[f64]) -> Summary {
    Summary {
        n: data.len(),
        mean: mean(data),
        sd: sample_std_dev(data),
        min: min(data),
        max: max(data),
        range: range(data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn std_dev_uses_bessel_correction() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let sd = sample_std_dev(&data);
        // population sd of this sample is exactly 2.0
        assert!((sd - 2.138_089_935).abs() < 1e-6, "got {sd}");
        assert!((sample_variance(&data) - 32.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn short_samples_have_zero_spread() {
        assert_eq!(sample_std_dev(&[]), 0.0);
        assert_eq!(sample_std_dev(&[42.0]), 0.0);
        assert_eq!(sample_variance(&[42.0]), 0.0);
    }

    #[test]
    fn empty_sample_is_all_zero() {
        let s = summarize(&[]);
        assert_eq!(s.n, 0);
        assert_eq!(s.mean, 0.0);
        assert_eq!(s.min, 0.0);
        assert_eq!(s.max, 0.0);
        assert_eq!(s.range, 0.0);
    }

    #[test]
    fn summary_of_known_sample() {
        let s = summarize(&[3.0, -1.5, 7.0, 2.5]);
        assert_eq!(s.n, 4);
        assert!((s.mean - 2.75).abs() < 1e-12);
        assert_eq!(s.min, -1.5);
        assert_eq!(s.max, 7.0);
        assert_eq!(s.range, 8.5);
    }

    #[test]
    fn extremes_do_not_depend_on_order() {
        let data = [4.5, -3.0, 12.25, 0.0, -3.5, 7.0];
        assert_eq!(min(&data), -3.5);
        assert_eq!(max(&data), 12.25);
        assert_eq!(range(&data), 15.75);

        let single = [-2.0];
        assert_eq!(min(&single), -2.0);
        assert_eq!(max(&single), -2.0);
        assert_eq!(range(&single), 0.0);
    }

    #[test]
    fn constant_sample_has_zero_sd() {
        let data = vec![100.0; 10];
        assert_eq!(sample_std_dev(&data), 0.0);
        assert_eq!(range(&data), 0.0);
    }
}
