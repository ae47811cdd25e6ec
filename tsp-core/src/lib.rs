//! Core crate contains building blocks to represent a solution of ***Traveling Salesman Problem***:
//! a tour over geographic points.
//!
//! A [`Tour`](models::solution::Tour) is a passive container: it keeps points in their visiting
//! order, rejects duplicates and calculates the length of the closed cycle. Constructing or improving
//! the tour is a responsibility of the caller.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use tsp_core::prelude::*;
//!
//! let rome = Arc::new(City::new("Rome", Location::new(41.9028, 12.4964)));
//! let milan = Arc::new(City::new("Milan", Location::new(45.4642, 9.19)));
//! let naples = Arc::new(City::new("Naples", Location::new(40.8518, 14.2681)));
//!
//! let mut tour = Tour::new("Italy", false);
//! tour.append(rome.clone())?;
//! tour.append(milan.clone())?;
//! tour.insert_after(naples.clone(), &rome)?;
//!
//! assert_eq!(tour.position(1)?, &naples);
//! assert!(tour.is_valid(&[milan, naples, rome]));
//! assert!(tour.length(DistanceUnit::Kilometers)? > tour.length(DistanceUnit::Miles)?);
//! # Ok::<(), TourError>(())
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
pub mod features;

pub mod models;
pub mod prelude;
pub mod utils;
