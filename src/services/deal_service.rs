//! Promotional deal annotations for the deals page.
//!
//! Deals are never persisted: each one is a pure function of the item id and
//! the current date, so repeated requests on the same day agree and tests can
//! pin a date. The distribution mirrors the storefront behavior: about half
//! of all items carry a deal on any given day.

use chrono::{Datelike, Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DealKind {
    Discount,
    Package,
    Cashback,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Deal {
    #[serde(rename = "type")]
    pub kind: DealKind,
    /// Percent off (or back, for cashback).
    pub value: u32,
    pub expiry: NaiveDate,
}

const HOTEL_STREAM: u64 = 0x68_6f_74_65_6c; // "hotel"
const FLIGHT_STREAM: u64 = 0x66_6c_69_67_68_74; // "flight"

fn rng_for(stream: u64, id: u32, date: NaiveDate) -> StdRng {
    let seed = stream
        .wrapping_mul(0x9e37_79b9_7f4a_7c15)
        .wrapping_add((id as u64) << 20)
        .wrapping_add(date.num_days_from_ce() as u64);
    StdRng::seed_from_u64(seed)
}

pub fn hotel_deal(id: u32, date: NaiveDate) -> Option<Deal> {
    let mut rng = rng_for(HOTEL_STREAM, id, date);
    if !rng.gen_bool(0.5) {
        return None;
    }
    let kind = if rng.gen_bool(0.5) {
        DealKind::Discount
    } else {
        DealKind::Package
    };
    Some(Deal {
        kind,
        value: rng.gen_range(10..40),
        expiry: date + Duration::days(rng.gen_range(1..=15)),
    })
}

pub fn flight_deal(id: u32, date: NaiveDate) -> Option<Deal> {
    let mut rng = rng_for(FLIGHT_STREAM, id, date);
    if !rng.gen_bool(0.5) {
        return None;
    }
    let kind = if rng.gen_bool(0.5) {
        DealKind::Discount
    } else {
        DealKind::Cashback
    };
    Some(Deal {
        kind,
        value: rng.gen_range(5..25),
        expiry: date + Duration::days(rng.gen_range(1..=11)),
    })
}
