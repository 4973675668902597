//! Fresh-type binding benchmark.

use std::fmt;
use std::time::{Duration, Instant};

use dyb_bind::{Binder, Precedence, StatsSnapshot};
use dyb_object::{DynObject, ExpectedType, Resolution, ResolverHook, TypeBuilder, Value};

/// Benchmark configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Number of fresh types to define (one per iteration).
    pub loops: usize,
    /// Attribute read from every instance.
    pub member: String,
    /// Reads per instance. Reads after the first hit the site cache.
    pub reads_per_type: usize,
    /// Log progress every N iterations; 0 disables progress logging.
    pub report_every: usize,
    pub precedence: Precedence,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            loops: 5000,
            member: "test".to_string(),
            reads_per_type: 1,
            report_every: 500,
            precedence: Precedence::ResolverFirst,
        }
    }
}

impl HarnessConfig {
    /// Parse `--flag=value` arguments on top of the defaults.
    pub fn parse(args: &[String]) -> Result<Self, String> {
        let mut config = Self::default();
        for arg in args {
            if let Some(value) = arg.strip_prefix("--loops=") {
                config.loops = parse_count("--loops", value)?;
            } else if let Some(value) = arg.strip_prefix("--member=") {
                if value.is_empty() {
                    return Err("--member requires a name".to_string());
                }
                config.member = value.to_string();
            } else if let Some(value) = arg.strip_prefix("--reads=") {
                config.reads_per_type = parse_count("--reads", value)?.max(1);
            } else if let Some(value) = arg.strip_prefix("--report-every=") {
                config.report_every = parse_count("--report-every", value)?;
            } else if arg == "--member-first" {
                config.precedence = Precedence::MemberFirst;
            } else {
                return Err(format!("unknown option '{arg}'"));
            }
        }
        Ok(config)
    }
}

fn parse_count(flag: &str, value: &str) -> Result<usize, String> {
    value
        .parse()
        .map_err(|_| format!("{flag} expects a non-negative integer, got '{value}'"))
}

/// Outcome of a benchmark run.
#[derive(Clone, Debug, PartialEq)]
pub struct HarnessReport {
    pub iterations: usize,
    pub elapsed: Duration,
    pub types_defined: usize,
    pub stats: StatsSnapshot,
    /// Reads that returned an error.
    pub failures: usize,
}

impl fmt::Display for HarnessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Test ended after {:.3}s ({} iterations, {} types defined)",
            self.elapsed.as_secs_f64(),
            self.iterations,
            self.types_defined
        )?;
        write!(
            f,
            "  detections: {}  hits: {}  misses: {}  hit rate: {:.1}%  failures: {}",
            self.stats.detections,
            self.stats.hits,
            self.stats.misses,
            self.stats.hit_rate(),
            self.failures
        )
    }
}

/// Run the benchmark.
///
/// One site is declared for `config.member`. Each iteration defines
/// `DummyType{i}` with a hook that answers `"dummy"` for every name,
/// instantiates it, and reads the member through the site.
#[tracing::instrument(level = "debug", skip_all, fields(loops = config.loops, member = %config.member))]
pub fn run(config: &HarnessConfig) -> HarnessReport {
    let binder = Binder::builder().precedence(config.precedence).build();
    let site = binder.declare_site(&config.member, ExpectedType::Any);
    let hook = ResolverHook::custom(|_, _| Ok(Resolution::Found(Value::from("dummy"))));

    let start = Instant::now();
    let mut failures = 0usize;
    for i in 0..config.loops {
        let name = binder.interner().intern_owned(format!("DummyType{i}"));
        let ty = binder.types().define(TypeBuilder::new(name).hook(hook.clone()));
        let obj = Value::object(DynObject::new(ty));

        for _ in 0..config.reads_per_type {
            if let Err(err) = binder.evaluate(site, &obj) {
                failures = failures.saturating_add(1);
                tracing::warn!(iteration = i, %err, "read failed");
            }
        }

        let done = i.saturating_add(1);
        if config.report_every > 0 && done % config.report_every == 0 {
            tracing::info!(
                done,
                loops = config.loops,
                elapsed_ms = start.elapsed().as_millis(),
                "progress"
            );
        }
    }

    HarnessReport {
        iterations: config.loops,
        elapsed: start.elapsed(),
        types_defined: binder.types().len(),
        stats: binder.stats(),
        failures,
    }
}
