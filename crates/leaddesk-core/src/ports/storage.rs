//! Storage trait for the admin panel collections
//!
//! A lookup that finds nothing is `None` (or `false` for deletes), never an
//! error: handlers translate that into a 404 themselves. Every successful
//! create/update/delete appends exactly one [`Activity`] as part of the same
//! call; a call that finds nothing appends none.

use async_trait::async_trait;
use leaddesk_types::{
    Activity, Blog, Contact, EnquiryForm, LoginHistory, NewActivity, NewBlog, NewContact,
    NewEnquiryForm, NewLoginHistory, NewUser, NewVideo, UpdateBlog, UpdateEnquiryForm,
    UpdateUser, UpdateVideo, User, Video,
};

/// Most recent activities returned by [`Storage::get_all_activities`].
pub const RECENT_ACTIVITY_LIMIT: usize = 10;

/// Fallback recorded when a login carries no client address.
pub const DEFAULT_IP_ADDRESS: &str = "127.0.0.1";

/// Fallback recorded when a login carries no user agent.
pub const DEFAULT_USER_AGENT: &str = "Unknown";

#[async_trait]
pub trait Storage: Send + Sync {
    // Users
    async fn get_user(&self, id: &str) -> Option<User>;
    /// First user with exactly this username. Usernames are not unique.
    async fn get_user_by_username(&self, username: &str) -> Option<User>;
    /// Newest first.
    async fn get_all_users(&self) -> Vec<User>;
    async fn create_user(&self, user: NewUser) -> User;
    async fn update_user(&self, id: &str, update: UpdateUser) -> Option<User>;
    async fn delete_user(&self, id: &str) -> bool;
    async fn update_user_permissions(&self, id: &str, permissions: Vec<String>) -> Option<User>;
    async fn update_user_status(&self, id: &str, is_active: bool) -> Option<User>;
    /// Bumps the login counter, stamps `last_login` and records a
    /// [`LoginHistory`] row. Unknown ids are ignored.
    async fn update_user_login(&self, id: &str, ip_address: Option<&str>, user_agent: Option<&str>);

    // Login history
    async fn get_all_login_history(&self) -> Vec<LoginHistory>;
    async fn get_user_login_history(&self, user_id: &str) -> Vec<LoginHistory>;
    async fn create_login_history(&self, entry: NewLoginHistory) -> LoginHistory;

    // Blogs
    async fn get_all_blogs(&self) -> Vec<Blog>;
    async fn get_blog(&self, id: &str) -> Option<Blog>;
    async fn create_blog(&self, blog: NewBlog) -> Blog;
    async fn update_blog(&self, id: &str, update: UpdateBlog) -> Option<Blog>;
    async fn delete_blog(&self, id: &str) -> bool;
    /// Case-insensitive substring search; result order is unspecified.
    async fn search_blogs(&self, query: &str) -> Vec<Blog>;

    // Videos
    async fn get_all_videos(&self) -> Vec<Video>;
    async fn get_video(&self, id: &str) -> Option<Video>;
    async fn create_video(&self, video: NewVideo) -> Video;
    async fn update_video(&self, id: &str, update: UpdateVideo) -> Option<Video>;
    async fn delete_video(&self, id: &str) -> bool;
    async fn search_videos(&self, query: &str) -> Vec<Video>;

    // Contacts
    async fn get_all_contacts(&self) -> Vec<Contact>;
    async fn create_contact(&self, contact: NewContact) -> Contact;

    // Enquiry forms
    /// Active forms only.
    async fn get_all_enquiry_forms(&self) -> Vec<EnquiryForm>;
    async fn get_enquiry_form(&self, id: &str) -> Option<EnquiryForm>;
    async fn create_enquiry_form(&self, form: NewEnquiryForm) -> EnquiryForm;
    async fn update_enquiry_form(&self, id: &str, update: UpdateEnquiryForm) -> Option<EnquiryForm>;
    async fn delete_enquiry_form(&self, id: &str) -> bool;

    // Activities
    /// The [`RECENT_ACTIVITY_LIMIT`] newest entries, newest first.
    async fn get_all_activities(&self) -> Vec<Activity>;
    async fn create_activity(&self, activity: NewActivity) -> Activity;
}
