use crate::types::{Category, Report, ReportStatus, Severity};
use time::{Duration, OffsetDateTime};

/// Sample community reports the feed starts with, timestamped relative to `now`.
pub fn initial_reports(now: OffsetDateTime) -> Vec<Report> {
    vec![
        Report {
            id: "1".to_string(),
            title: "ZESA Transformer Fault".to_string(),
            description: "The transformer on Samora Machel Ave blew up last night. The whole block is without power and traffic lights are down.".to_string(),
            category: Category::Infrastructure,
            severity: Severity::High,
            location: "Samora Machel Ave, Harare".to_string(),
            timestamp: now - Duration::hours(2),
            votes: 45,
            status: ReportStatus::Open,
            author: "Tendai M.".to_string(),
        },
        Report {
            id: "2".to_string(),
            title: "Suspicious Honda Fit".to_string(),
            description: "A silver Honda Fit without plates has been parked near the primary school gate for 2 hours. Driver is just sitting there.".to_string(),
            category: Category::Suspicious,
            severity: Severity::Medium,
            location: "Borrowdale Road, Harare".to_string(),
            timestamp: now - Duration::days(1),
            votes: 12,
            status: ReportStatus::Investigating,
            author: "Sarah K.".to_string(),
        },
        Report {
            id: "3".to_string(),
            title: "Lost Boerboel Puppy".to_string(),
            description: "Brown Boerboel puppy lost near the shops. Answers to \"Simba\". Please help!".to_string(),
            category: Category::LostFound,
            severity: Severity::Low,
            location: "Hillside, Bulawayo".to_string(),
            timestamp: now - Duration::minutes(30),
            votes: 28,
            status: ReportStatus::Open,
            author: "Nkosana D.".to_string(),
        },
        Report {
            id: "4".to_string(),
            title: "Burst Water Pipe".to_string(),
            description: "Major council pipe burst flooding the road. Water is wasted everywhere, road is becoming impassable.".to_string(),
            category: Category::Infrastructure,
            severity: Severity::Critical,
            location: "Second Street Ext, Avondale".to_string(),
            timestamp: now - Duration::hours(5),
            votes: 60,
            status: ReportStatus::Open,
            author: "Chipo Z.".to_string(),
        },
        Report {
            id: "5".to_string(),
            title: "Community Braai".to_string(),
            description: "Neighborhood braai at the sports club this Saturday. Bring your own drinks and cooler box!".to_string(),
            category: Category::Community,
            severity: Severity::Low,
            location: "Old Georgians Sports Club".to_string(),
            timestamp: now - Duration::days(2),
            votes: 85,
            status: ReportStatus::Resolved,
            author: "Farai G.".to_string(),
        },
    ]
}
