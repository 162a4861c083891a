//! In-memory implementation of the storage port using DashMap tables

use super::seed;
use super::table::Table;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use leaddesk_core::ports::{DEFAULT_IP_ADDRESS, DEFAULT_USER_AGENT, RECENT_ACTIVITY_LIMIT};
use leaddesk_core::Storage;
use leaddesk_types::{
    Activity, ActivityAction, ActivityType, Blog, Contact, EnquiryForm, LoginHistory,
    NewActivity, NewBlog, NewContact, NewEnquiryForm, NewLoginHistory, NewUser, NewVideo,
    UpdateBlog, UpdateEnquiryForm, UpdateUser, UpdateVideo, User, Video,
};
use tracing::{debug, info};
use uuid::Uuid;

/// Process-lifetime store for every admin panel collection
pub struct MemStorage {
    users: Table<User>,
    login_history: Table<LoginHistory>,
    blogs: Table<Blog>,
    videos: Table<Video>,
    contacts: Table<Contact>,
    enquiry_forms: Table<EnquiryForm>,
    activities: Table<Activity>,
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// `now`, nudged forward if the clock has not moved past `previous`.
fn later_than(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}

impl MemStorage {
    /// Empty tables plus the admin account and the two sample enquiry forms.
    pub fn new() -> Self {
        let storage = Self {
            users: Table::new(),
            login_history: Table::new(),
            blogs: Table::new(),
            videos: Table::new(),
            contacts: Table::new(),
            enquiry_forms: Table::new(),
            activities: Table::new(),
        };

        let admin = seed::admin_user();
        storage.users.insert(admin.id.clone(), admin);
        for form in seed::enquiry_forms() {
            storage.enquiry_forms.insert(form.id.clone(), form);
        }
        info!(
            "Seeded {} user(s) and {} enquiry form(s)",
            storage.users.len(),
            storage.enquiry_forms.len()
        );

        storage
    }

    fn record(&self, kind: ActivityType, action: ActivityAction, title: String) -> Activity {
        let activity = Activity {
            id: new_id(),
            kind,
            action,
            title,
            created_at: Utc::now(),
        };
        debug!("Activity: {} {} - {}", activity.kind, activity.action, activity.title);
        self.activities.insert(activity.id.clone(), activity.clone());
        activity
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemStorage {
    // Users

    async fn get_user(&self, id: &str) -> Option<User> {
        self.users.get(id)
    }

    async fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.users.find(|user| user.username == username)
    }

    async fn get_all_users(&self) -> Vec<User> {
        self.users.newest_first(|_| true, |user| user.created_at)
    }

    async fn create_user(&self, new: NewUser) -> User {
        let now = Utc::now();
        let user = User {
            id: new_id(),
            username: new.username,
            password: new.password,
            email: new.email,
            role: new.role,
            is_active: new.is_active,
            permissions: new.permissions,
            last_login: None,
            login_count: "0".to_string(),
            created_at: now,
            updated_at: now,
        };
        self.users.insert(user.id.clone(), user.clone());

        self.record(
            ActivityType::User,
            ActivityAction::Created,
            format!("New user \"{}\" was created", user.username),
        );
        user
    }

    async fn update_user(&self, id: &str, update: UpdateUser) -> Option<User> {
        let updated = self.users.update(id, |user| {
            user.apply(update);
            user.updated_at = later_than(user.updated_at);
        })?;

        self.record(
            ActivityType::User,
            ActivityAction::Updated,
            format!("User \"{}\" was updated", updated.username),
        );
        Some(updated)
    }

    async fn delete_user(&self, id: &str) -> bool {
        let Some(user) = self.users.remove(id) else {
            return false;
        };

        self.record(
            ActivityType::User,
            ActivityAction::Deleted,
            format!("User \"{}\" was deleted", user.username),
        );
        true
    }

    async fn update_user_permissions(&self, id: &str, permissions: Vec<String>) -> Option<User> {
        let updated = self.users.update(id, |user| {
            user.permissions = permissions;
            user.updated_at = later_than(user.updated_at);
        })?;

        self.record(
            ActivityType::User,
            ActivityAction::Updated,
            format!("Permissions updated for user \"{}\"", updated.username),
        );
        Some(updated)
    }

    async fn update_user_status(&self, id: &str, is_active: bool) -> Option<User> {
        let updated = self.users.update(id, |user| {
            user.is_active = is_active;
            user.updated_at = later_than(user.updated_at);
        })?;

        let verb = if is_active { "activated" } else { "deactivated" };
        self.record(
            ActivityType::User,
            ActivityAction::Updated,
            format!("User \"{}\" was {}", updated.username, verb),
        );
        Some(updated)
    }

    async fn update_user_login(&self, id: &str, ip_address: Option<&str>, user_agent: Option<&str>) {
        let Some(user) = self.users.update(id, |user| {
            user.login_count = (user.login_count() + 1).to_string();
            user.last_login = Some(Utc::now());
            user.updated_at = later_than(user.updated_at);
        }) else {
            debug!("Login tracking skipped for unknown user {}", id);
            return;
        };

        self.create_login_history(NewLoginHistory {
            user_id: user.id,
            username: user.username,
            ip_address: ip_address.unwrap_or(DEFAULT_IP_ADDRESS).to_string(),
            user_agent: user_agent.unwrap_or(DEFAULT_USER_AGENT).to_string(),
        })
        .await;
    }

    // Login history

    async fn get_all_login_history(&self) -> Vec<LoginHistory> {
        self.login_history.newest_first(|_| true, |entry| entry.login_time)
    }

    async fn get_user_login_history(&self, user_id: &str) -> Vec<LoginHistory> {
        self.login_history
            .newest_first(|entry| entry.user_id == user_id, |entry| entry.login_time)
    }

    async fn create_login_history(&self, new: NewLoginHistory) -> LoginHistory {
        let entry = LoginHistory {
            id: new_id(),
            user_id: new.user_id,
            username: new.username,
            ip_address: new.ip_address,
            user_agent: new.user_agent,
            login_time: Utc::now(),
        };
        self.login_history.insert(entry.id.clone(), entry.clone());
        entry
    }

    // Blogs

    async fn get_all_blogs(&self) -> Vec<Blog> {
        self.blogs.newest_first(|_| true, |blog| blog.created_at)
    }

    async fn get_blog(&self, id: &str) -> Option<Blog> {
        self.blogs.get(id)
    }

    async fn create_blog(&self, new: NewBlog) -> Blog {
        let now = Utc::now();
        let blog = Blog {
            id: new_id(),
            title: new.title,
            content: new.content,
            category: new.category,
            created_at: now,
            updated_at: now,
        };
        self.blogs.insert(blog.id.clone(), blog.clone());

        self.record(
            ActivityType::Blog,
            ActivityAction::Created,
            format!("New blog \"{}\" was created", blog.title),
        );
        blog
    }

    async fn update_blog(&self, id: &str, update: UpdateBlog) -> Option<Blog> {
        let updated = self.blogs.update(id, |blog| {
            blog.apply(update);
            blog.updated_at = later_than(blog.updated_at);
        })?;

        self.record(
            ActivityType::Blog,
            ActivityAction::Updated,
            format!("Blog \"{}\" was updated", updated.title),
        );
        Some(updated)
    }

    async fn delete_blog(&self, id: &str) -> bool {
        let Some(blog) = self.blogs.remove(id) else {
            return false;
        };

        self.record(
            ActivityType::Blog,
            ActivityAction::Deleted,
            format!("Blog \"{}\" was deleted", blog.title),
        );
        true
    }

    async fn search_blogs(&self, query: &str) -> Vec<Blog> {
        let needle = query.to_lowercase();
        self.blogs.filter(|blog| blog.matches(&needle))
    }

    // Videos

    async fn get_all_videos(&self) -> Vec<Video> {
        self.videos.newest_first(|_| true, |video| video.created_at)
    }

    async fn get_video(&self, id: &str) -> Option<Video> {
        self.videos.get(id)
    }

    async fn create_video(&self, new: NewVideo) -> Video {
        let video = Video {
            id: new_id(),
            title: new.title,
            description: new.description,
            created_at: Utc::now(),
        };
        self.videos.insert(video.id.clone(), video.clone());

        self.record(
            ActivityType::Video,
            ActivityAction::Created,
            format!("New video \"{}\" was added", video.title),
        );
        video
    }

    async fn update_video(&self, id: &str, update: UpdateVideo) -> Option<Video> {
        let updated = self.videos.update(id, |video| video.apply(update))?;

        self.record(
            ActivityType::Video,
            ActivityAction::Updated,
            format!("Video \"{}\" was updated", updated.title),
        );
        Some(updated)
    }

    async fn delete_video(&self, id: &str) -> bool {
        let Some(video) = self.videos.remove(id) else {
            return false;
        };

        self.record(
            ActivityType::Video,
            ActivityAction::Deleted,
            format!("Video \"{}\" was deleted", video.title),
        );
        true
    }

    async fn search_videos(&self, query: &str) -> Vec<Video> {
        let needle = query.to_lowercase();
        self.videos.filter(|video| video.matches(&needle))
    }

    // Contacts

    async fn get_all_contacts(&self) -> Vec<Contact> {
        self.contacts.newest_first(|_| true, |contact| contact.created_at)
    }

    async fn create_contact(&self, new: NewContact) -> Contact {
        let contact = Contact {
            id: new_id(),
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            phone: new.phone,
            subject: new.subject,
            message: new.message,
            created_at: Utc::now(),
        };
        self.contacts.insert(contact.id.clone(), contact.clone());

        self.record(
            ActivityType::Contact,
            ActivityAction::Created,
            format!(
                "New contact message from {} {}",
                contact.first_name, contact.last_name
            ),
        );
        contact
    }

    // Enquiry forms

    async fn get_all_enquiry_forms(&self) -> Vec<EnquiryForm> {
        self.enquiry_forms
            .newest_first(|form| form.is_active, |form| form.created_at)
    }

    async fn get_enquiry_form(&self, id: &str) -> Option<EnquiryForm> {
        self.enquiry_forms.get(id)
    }

    async fn create_enquiry_form(&self, new: NewEnquiryForm) -> EnquiryForm {
        let form = EnquiryForm {
            id: new_id(),
            title: new.title,
            description: new.description,
            icon: new.icon,
            image: new.image,
            google_form_url: new.google_form_url,
            features: new.features,
            is_active: new.is_active,
            created_at: Utc::now(),
        };
        self.enquiry_forms.insert(form.id.clone(), form.clone());

        self.record(
            ActivityType::Enquiry,
            ActivityAction::Created,
            format!("New enquiry form \"{}\" was created", form.title),
        );
        form
    }

    async fn update_enquiry_form(&self, id: &str, update: UpdateEnquiryForm) -> Option<EnquiryForm> {
        let updated = self.enquiry_forms.update(id, |form| form.apply(update))?;

        self.record(
            ActivityType::Enquiry,
            ActivityAction::Updated,
            format!("Enquiry form \"{}\" was updated", updated.title),
        );
        Some(updated)
    }

    async fn delete_enquiry_form(&self, id: &str) -> bool {
        let Some(form) = self.enquiry_forms.remove(id) else {
            return false;
        };

        self.record(
            ActivityType::Enquiry,
            ActivityAction::Deleted,
            format!("Enquiry form \"{}\" was deleted", form.title),
        );
        true
    }

    // Activities

    async fn get_all_activities(&self) -> Vec<Activity> {
        let mut recent = self
            .activities
            .newest_first(|_| true, |activity| activity.created_at);
        recent.truncate(RECENT_ACTIVITY_LIMIT);
        recent
    }

    async fn create_activity(&self, new: NewActivity) -> Activity {
        self.record(new.kind, new.action, new.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_blog(title: &str, content: &str, category: &str) -> NewBlog {
        NewBlog {
            title: title.to_string(),
            content: content.to_string(),
            category: category.to_string(),
        }
    }

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            password: "pw".to_string(),
            email: format!("{}@example.com", username),
            role: "editor".to_string(),
            is_active: true,
            permissions: vec!["blogs".to_string()],
        }
    }

    #[tokio::test]
    async fn test_seed_data() {
        let storage = MemStorage::new();

        let admin = storage.get_user_by_username("36xfinance").await.unwrap();
        assert_eq!(admin.role, "admin");
        assert_eq!(admin.login_count, "0");
        assert!(admin.is_active);
        assert_eq!(admin.permissions.len(), 6);

        let forms = storage.get_all_enquiry_forms().await;
        assert_eq!(forms.len(), 2);
        assert!(forms.iter().any(|f| f.title == "Tax Consultation"));

        // Seeding is not an activity
        assert!(storage.get_all_activities().await.is_empty());
    }

    #[tokio::test]
    async fn test_create_then_get_returns_same_record() {
        let storage = MemStorage::new();

        let blog = storage.create_blog(new_blog("A", "alpha", "news")).await;
        assert_eq!(storage.get_blog(&blog.id).await, Some(blog.clone()));
        assert_eq!(blog.created_at, blog.updated_at);

        let other = storage.create_blog(new_blog("B", "beta", "news")).await;
        assert_ne!(blog.id, other.id);

        let user = storage.create_user(new_user("carol")).await;
        let fetched = storage.get_user(&user.id).await.unwrap();
        assert_eq!(fetched, user);
        assert_eq!(fetched.login_count, "0");
        assert!(fetched.last_login.is_none());
    }

    #[tokio::test]
    async fn test_search_blogs_is_case_insensitive() {
        let storage = MemStorage::new();
        let blog = storage.create_blog(new_blog("A", "alpha", "news")).await;
        storage.create_blog(new_blog("Other", "beta", "misc")).await;

        let hits = storage.search_blogs("AL").await;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, blog.id);

        assert!(storage.search_blogs("zzz").await.is_empty());
        assert_eq!(storage.search_blogs("").await.len(), 2);
        assert_eq!(storage.search_blogs("NEWS").await.len(), 1);
    }

    #[tokio::test]
    async fn test_search_videos_covers_description() {
        let storage = MemStorage::new();
        storage
            .create_video(NewVideo {
                title: "Quarterly update".to_string(),
                description: "Filing GST Returns".to_string(),
            })
            .await;

        assert_eq!(storage.search_videos("gst").await.len(), 1);
        assert_eq!(storage.search_videos("QUARTER").await.len(), 1);
        assert!(storage.search_videos("payroll").await.is_empty());
    }

    #[tokio::test]
    async fn test_partial_update_keeps_other_fields() {
        let storage = MemStorage::new();
        let blog = storage.create_blog(new_blog("A", "alpha", "news")).await;

        let update = UpdateBlog {
            category: Some("tax".to_string()),
            ..Default::default()
        };
        let first = storage.update_blog(&blog.id, update.clone()).await.unwrap();
        assert_eq!(first.title, "A");
        assert_eq!(first.content, "alpha");
        assert_eq!(first.category, "tax");
        assert_eq!(first.created_at, blog.created_at);
        assert!(first.updated_at > blog.updated_at);

        let second = storage.update_blog(&blog.id, update).await.unwrap();
        assert!(second.updated_at > first.updated_at);
        assert_eq!(
            (&second.title, &second.content, &second.category),
            (&first.title, &first.content, &first.category)
        );
    }

    #[tokio::test]
    async fn test_missing_ids_do_not_record_activity() {
        let storage = MemStorage::new();

        assert!(storage.update_user("nope", UpdateUser::default()).await.is_none());
        assert!(storage.update_blog("nope", UpdateBlog::default()).await.is_none());
        assert!(storage.update_video("nope", UpdateVideo::default()).await.is_none());
        assert!(storage
            .update_enquiry_form("nope", UpdateEnquiryForm::default())
            .await
            .is_none());
        assert!(storage.update_user_status("nope", false).await.is_none());
        assert!(storage.update_user_permissions("nope", vec![]).await.is_none());
        assert!(!storage.delete_user("nope").await);
        assert!(!storage.delete_blog("nope").await);
        assert!(!storage.delete_video("nope").await);
        assert!(!storage.delete_enquiry_form("nope").await);
        storage.update_user_login("nope", None, None).await;

        assert!(storage.get_all_activities().await.is_empty());
        assert!(storage.get_all_login_history().await.is_empty());
    }

    #[tokio::test]
    async fn test_delete_user_records_single_activity() {
        let storage = MemStorage::new();
        let user = storage.create_user(new_user("dave")).await;
        let before = storage.get_all_activities().await.len();

        assert!(storage.delete_user(&user.id).await);
        assert!(storage
            .get_all_users()
            .await
            .iter()
            .all(|u| u.id != user.id));

        let activities = storage.get_all_activities().await;
        assert_eq!(activities.len(), before + 1);
        assert_eq!(activities[0].kind, ActivityType::User);
        assert_eq!(activities[0].action, ActivityAction::Deleted);
        assert_eq!(activities[0].title, "User \"dave\" was deleted");

        assert!(!storage.delete_user(&user.id).await);
    }

    #[tokio::test]
    async fn test_activities_capped_at_ten_newest_first() {
        let storage = MemStorage::new();
        for i in 0..25 {
            storage
                .create_blog(new_blog(&format!("post {}", i), "body", "news"))
                .await;
        }

        let activities = storage.get_all_activities().await;
        assert_eq!(activities.len(), RECENT_ACTIVITY_LIMIT);
        assert_eq!(activities[0].title, "New blog \"post 24\" was created");
        assert_eq!(activities[9].title, "New blog \"post 15\" was created");
        for pair in activities.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }

    #[tokio::test]
    async fn test_update_user_login_tracks_history() {
        let storage = MemStorage::new();
        let user = storage.create_user(new_user("erin")).await;
        storage
            .update_user(
                &user.id,
                UpdateUser {
                    role: Some("editor".to_string()),
                    ..Default::default()
                },
            )
            .await;
        storage
            .users
            .update(&user.id, |u| u.login_count = "3".to_string());
        let activities_before = storage.get_all_activities().await;

        let before = Utc::now();
        storage
            .update_user_login(&user.id, Some("1.2.3.4"), Some("curl/8.0"))
            .await;

        let updated = storage.get_user(&user.id).await.unwrap();
        assert_eq!(updated.login_count, "4");
        assert!(updated.last_login.unwrap() >= before);

        let history = storage.get_user_login_history(&user.id).await;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].ip_address, "1.2.3.4");
        assert_eq!(history[0].user_agent, "curl/8.0");
        assert_eq!(history[0].username, "erin");

        // Login tracking is not an activity
        assert_eq!(storage.get_all_activities().await, activities_before);
    }

    #[tokio::test]
    async fn test_update_user_login_defaults() {
        let storage = MemStorage::new();
        let admin = storage.get_user_by_username("36xfinance").await.unwrap();

        storage.update_user_login(&admin.id, None, None).await;
        storage.update_user_login(&admin.id, None, Some("Firefox")).await;

        let history = storage.get_all_login_history().await;
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].user_agent, "Firefox");
        assert_eq!(history[1].ip_address, DEFAULT_IP_ADDRESS);
        assert_eq!(history[1].user_agent, DEFAULT_USER_AGENT);
        assert_eq!(storage.get_user(&admin.id).await.unwrap().login_count, "2");
    }

    #[tokio::test]
    async fn test_login_history_survives_user_deletion() {
        let storage = MemStorage::new();
        let user = storage.create_user(new_user("frank")).await;
        storage.update_user_login(&user.id, None, None).await;
        storage.delete_user(&user.id).await;

        let history = storage.get_user_login_history(&user.id).await;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].user_id, user.id);
    }

    #[tokio::test]
    async fn test_status_and_permission_activity_titles() {
        let storage = MemStorage::new();
        let user = storage.create_user(new_user("gina")).await;

        let off = storage.update_user_status(&user.id, false).await.unwrap();
        assert!(!off.is_active);
        assert_eq!(
            storage.get_all_activities().await[0].title,
            "User \"gina\" was deactivated"
        );

        storage.update_user_status(&user.id, true).await;
        assert_eq!(
            storage.get_all_activities().await[0].title,
            "User \"gina\" was activated"
        );

        let perms = storage
            .update_user_permissions(&user.id, vec!["videos".to_string()])
            .await
            .unwrap();
        assert_eq!(perms.permissions, vec!["videos".to_string()]);
        assert_eq!(
            storage.get_all_activities().await[0].title,
            "Permissions updated for user \"gina\""
        );
    }

    #[tokio::test]
    async fn test_duplicate_usernames_are_allowed() {
        let storage = MemStorage::new();
        let first = storage.create_user(new_user("hank")).await;
        let second = storage.create_user(new_user("hank")).await;
        assert_ne!(first.id, second.id);

        let found = storage.get_user_by_username("hank").await.unwrap();
        assert_eq!(found.id, first.id);
        assert_eq!(storage.get_all_users().await.len(), 3);
    }

    #[tokio::test]
    async fn test_inactive_enquiry_forms_are_hidden_from_list() {
        let storage = MemStorage::new();
        let form = storage
            .create_enquiry_form(NewEnquiryForm {
                title: "Audit".to_string(),
                description: "Annual audit".to_string(),
                icon: String::new(),
                image: String::new(),
                google_form_url: "https://forms.gle/audit".to_string(),
                features: vec![],
                is_active: false,
            })
            .await;

        assert_eq!(storage.get_all_enquiry_forms().await.len(), 2);
        assert!(storage.get_enquiry_form(&form.id).await.is_some());

        storage
            .update_enquiry_form(
                &form.id,
                UpdateEnquiryForm {
                    is_active: Some(true),
                    ..Default::default()
                },
            )
            .await;
        let forms = storage.get_all_enquiry_forms().await;
        assert_eq!(forms.len(), 3);
        assert_eq!(forms[0].id, form.id);
    }

    #[tokio::test]
    async fn test_contacts_newest_first() {
        let storage = MemStorage::new();
        for name in ["Ann", "Ben"] {
            storage
                .create_contact(NewContact {
                    first_name: name.to_string(),
                    last_name: "Smith".to_string(),
                    email: "x@example.com".to_string(),
                    phone: None,
                    subject: "Hello".to_string(),
                    message: "Hi".to_string(),
                })
                .await;
        }

        let contacts = storage.get_all_contacts().await;
        assert_eq!(contacts[0].first_name, "Ben");
        assert_eq!(
            storage.get_all_activities().await[0].title,
            "New contact message from Ben Smith"
        );
    }

    #[tokio::test]
    async fn test_create_activity_directly() {
        let storage = MemStorage::new();
        let activity = storage
            .create_activity(NewActivity::new(
                ActivityType::Enquiry,
                ActivityAction::Updated,
                "Manual entry",
            ))
            .await;

        let activities = storage.get_all_activities().await;
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0], activity);
    }

    #[test]
    fn test_storage_is_usable_from_sync_code() {
        let storage = MemStorage::new();
        let users = tokio_test::block_on(storage.get_all_users());
        assert_eq!(users.len(), 1);
    }
}
