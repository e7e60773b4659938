use eyre::WrapErr;
use jiff::{SignedDuration, Timestamp};
use types::{
    Activity, ActivityKind, DashboardSummary, Icon, Palette, Result, Stat,
    format::{currency, thousands},
};

/// Where dashboard numbers come from.
pub trait DashboardSource: Send + Sync {
    /// Summary as of `now`. Relative timestamps are computed from this one
    /// value.
    fn admin_summary(
        &self,
        now: Timestamp,
    ) -> impl Future<Output = Result<DashboardSummary>> + Send;
}

/// Fixed figures until the backend exposes real ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockDashboardSource;

impl MockDashboardSource {
    fn stats() -> Vec<Stat> {
        vec![
            Stat::new(
                "Total Users",
                thousands(1_234),
                8.2,
                Icon::Users,
                Palette::EarthBrown,
            ),
            Stat::new(
                "Total Properties",
                thousands(567),
                5.0,
                Icon::Building,
                Palette::ForestGreen,
            ),
            Stat::new(
                "Total Hotels",
                thousands(89),
                -2.0,
                Icon::Hotel,
                Palette::WarmGold,
            ),
            Stat::new(
                "Total Revenue",
                currency(124_567),
                18.7,
                Icon::DollarSign,
                Palette::DeepCharcoal,
            ),
        ]
    }

    fn activities(now: Timestamp) -> Result<Vec<Activity>> {
        let entries = [
            (
                "New user registered: John Doe",
                SignedDuration::from_mins(5),
                ActivityKind::Info,
            ),
            (
                "New property \"Luxury Villa\" was added",
                SignedDuration::from_mins(30),
                ActivityKind::Success,
            ),
            (
                "Payment of $1,200 received from Jane Smith",
                SignedDuration::from_hours(2),
                ActivityKind::Success,
            ),
            (
                "Scheduled maintenance for database backup",
                SignedDuration::from_hours(24),
                ActivityKind::Warning,
            ),
        ];

        let mut activities = Vec::with_capacity(entries.len());
        for (id, (message, ago, kind)) in (1..).zip(entries) {
            let timestamp = now
                .checked_sub(ago)
                .wrap_err("activity timestamp out of range")?;
            activities.push(Activity {
                id,
                message: message.to_string(),
                timestamp,
                kind,
                action: None,
            });
        }
        Ok(activities)
    }
}

impl DashboardSource for MockDashboardSource {
    async fn admin_summary(&self, now: Timestamp) -> Result<DashboardSummary> {
        Ok(DashboardSummary {
            stats: Self::stats(),
            activities: Self::activities(now)?,
            generated_at: now,
        })
    }
}
