use crate::model::{strings, NotificationChannel, NotificationTemplate};

pub fn notification_templates() -> Vec<NotificationTemplate> {
    vec![NotificationTemplate {
        id: "match_created".to_string(),
        channel: NotificationChannel::Email,
        subject: "New Match Found - CementCycle".to_string(),
        template: "A new match has been found for your {material_type}. Match score: {match_score}%"
            .to_string(),
        variables: strings(&["material_type", "match_score", "company_name"]),
        active: true,
    }]
}
