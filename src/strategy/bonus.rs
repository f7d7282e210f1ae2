//! Default bonus strategy
//!
//! The bonus is a share of the seller's profit that depends on the final
//! position. Branches are evaluated in order and the first match wins:
//!
//! | Condition                 | Share |
//! |---------------------------|-------|
//! | rank 0                    | 15%   |
//! | rank 1 or 2               | 10%   |
//! | rank `total - 1`          | 0%    |
//! | otherwise                 | 5%    |
//!
//! With one seller, rank 0 is also the last and receives 15%. With two or
//! three sellers, the last one is also rank 1 or 2 and receives 10%.

use crate::strategy::BonusStrategy;
use crate::types::SellerStat;
use rust_decimal::Decimal;

/// Rank-tiered share of profit
#[derive(Debug, Clone, Copy, Default)]
pub struct BonusByProfit;

impl BonusByProfit {
    /// Share of profit paid at `rank` out of `total`
    pub fn share(rank: usize, total: usize) -> Decimal {
        if rank == 0 {
            Decimal::new(15, 2)
        } else if rank == 1 || rank == 2 {
            Decimal::new(10, 2)
        } else if rank + 1 == total {
            Decimal::ZERO
        } else {
            Decimal::new(5, 2)
        }
    }
}

impl BonusStrategy for BonusByProfit {
    fn bonus(&self, rank: usize, total: usize, seller: &SellerStat) -> Decimal {
        calculate_bonus_by_profit(rank, total, seller)
    }
}

/// Plain-function form of [`BonusByProfit`]
pub fn calculate_bonus_by_profit(rank: usize, total: usize, seller: &SellerStat) -> Decimal {
    seller.profit * BonusByProfit::share(rank, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Seller;
    use rstest::rstest;
    use std::str::FromStr;

    fn stat_with_profit(profit: &str) -> SellerStat {
        let mut stat = SellerStat::new(&Seller {
            id: "seller_1".to_string(),
            first_name: "Ivan".to_string(),
            last_name: "Ivanov".to_string(),
        });
        stat.profit = Decimal::from_str(profit).unwrap();
        stat
    }

    #[rstest]
    #[case::first(0, 10, "0.15")]
    #[case::second(1, 10, "0.10")]
    #[case::third(2, 10, "0.10")]
    #[case::middle(5, 10, "0.05")]
    #[case::fourth(3, 10, "0.05")]
    #[case::last(9, 10, "0")]
    #[case::only_seller(0, 1, "0.15")]
    #[case::last_of_two(1, 2, "0.10")]
    #[case::last_of_three(2, 3, "0.10")]
    #[case::last_of_four(3, 4, "0")]
    fn test_share(#[case] rank: usize, #[case] total: usize, #[case] expected: &str) {
        assert_eq!(
            BonusByProfit::share(rank, total),
            Decimal::from_str(expected).unwrap()
        );
    }

    #[test]
    fn test_bonus_is_share_of_profit() {
        let stat = stat_with_profit("1000");
        assert_eq!(BonusByProfit.bonus(0, 3, &stat), Decimal::from(150));
        assert_eq!(BonusByProfit.bonus(1, 3, &stat), Decimal::from(100));
        assert_eq!(calculate_bonus_by_profit(2, 4, &stat), Decimal::from(100));
        assert_eq!(calculate_bonus_by_profit(3, 4, &stat), Decimal::ZERO);
    }

    #[test]
    fn test_shares_are_monotonic_for_four_or_more() {
        for total in 4..12 {
            let shares: Vec<Decimal> = (0..total)
                .map(|rank| BonusByProfit::share(rank, total))
                .collect();
            assert!(shares.windows(2).all(|pair| pair[0] >= pair[1]));
        }
    }
}
