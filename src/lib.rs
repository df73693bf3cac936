//! Course retake planning.
//!
//! Turns a list of course records into a prioritized, risk-scored retake
//! plan and allocates the chosen courses across upcoming semesters, with a
//! week-by-week workload profile.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `CourseRecord`, `RetakeCandidate`,
//!   `SemesterSlot`, `SemesterSchedule`, `TermCalendar`, `Strategy`
//! - **`gpa`**: Weighted GPA, credit totals, semester trend, what-if projections
//! - **`ranking`**: Composable tolerance-based ranking rules
//! - **`valuation`**: Candidate scoring, selection and plan aggregates
//! - **`scheduler`**: Parity-aware semester placement, heatmap, workload KPIs
//! - **`validation`**: Input integrity checks (duplicate codes, grade range)
//! - **`config`**: YAML-loadable planner configuration
//! - **`planner`**: The end-to-end pipeline
//!
//! # Architecture
//!
//! The engines are pure functions over explicit inputs. Data flows
//! `gpa → valuation → scheduler`; nothing is cached between calls, and
//! malformed numeric input degrades to zero rather than failing.
//!
//! # Logging
//!
//! Diagnostics go through the `log` facade. The crate never installs a
//! logger.

pub mod config;
pub mod gpa;
pub mod models;
pub mod planner;
pub mod ranking;
pub mod scheduler;
pub mod validation;
pub mod valuation;
