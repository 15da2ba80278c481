use crate::CONFIDENCE_Z;

/// Win tally for the hero across a batch of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Record {
    wins: usize,
    games: usize,
}

impl Record {
    pub fn wins(&self) -> usize {
        self.wins
    }
    pub fn games(&self) -> usize {
        self.games
    }
    pub fn push(&mut self, won: bool) {
        self.games += 1;
        if won {
            self.wins += 1;
        }
    }
    pub fn mean(&self) -> f64 {
        if self.games == 0 {
            0.
        } else {
            self.wins as f64 / self.games as f64
        }
    }
    /// Win rate and the half-width of its 95% interval, z·σ/√n with σ the
    /// population deviation of the win/loss outcomes. A unanimous record
    /// reports zero width.
    pub fn confidence(&self) -> (f64, f64) {
        let mean = self.mean();
        if self.wins == 0 || self.wins == self.games {
            (mean, 0.)
        } else {
            let std = (mean * (1. - mean)).sqrt();
            (mean, CONFIDENCE_Z * std / (self.games as f64).sqrt())
        }
    }
}

impl FromIterator<bool> for Record {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut record = Self::default();
        for won in iter {
            record.push(won);
        }
        record
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let (mean, deviation) = self.confidence();
        write!(f, "{:.4} ± {:.4} over {} games", mean, deviation, self.games)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unanimous_records_have_no_width() {
        let record = std::iter::repeat_n(true, 10).collect::<Record>();
        assert!(record.confidence() == (1., 0.));
        let record = std::iter::repeat_n(false, 10).collect::<Record>();
        assert!(record.confidence() == (0., 0.));
        assert!(Record::default().confidence() == (0., 0.));
    }

    #[test]
    fn interval_matches_normal_approximation() {
        let record = (0..1000).map(|i| i % 25 < 16).collect::<Record>();
        let (mean, deviation) = record.confidence();
        assert!((mean - 0.64).abs() < 1e-9);
        assert!((deviation - 1.96 * 0.48 / 1000f64.sqrt()).abs() < 1e-9);
    }
}
