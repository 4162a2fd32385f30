//! Endpoint registry: logical operation names to URL paths, relative to the
//! configured API base. Parameterized paths are pure builders; nothing here
//! validates or talks to the network.

pub mod auth {
    pub const LOGIN: &str = "/auth/login";
    pub const REGISTER: &str = "/auth/register";
    pub const ME: &str = "/auth/me";
    pub const ME_STATS: &str = "/auth/me/stats";
}

pub mod spots {
    pub const LIST: &str = "/spots";
    pub const SEARCH: &str = "/spots/search";
    pub const RECOMMENDATIONS: &str = "/spots/recommendations";

    pub fn detail(id: i64) -> String {
        format!("/spots/{}", id)
    }
}

pub mod news {
    pub const LIST: &str = "/news";
}

pub mod heritage {
    pub const LIST: &str = "/heritage";
}

pub mod admin {
    pub const STATS: &str = "/admin/stats";
    pub const USERS: &str = "/admin/users";
    pub const SPOTS: &str = "/admin/spots";
    pub const NEWS: &str = "/admin/news";

    pub fn update_role(id: i64) -> String {
        format!("/admin/users/{}/role", id)
    }

    pub fn update_spot(id: i64) -> String {
        format!("/admin/spots/{}", id)
    }

    pub fn update_news(id: i64) -> String {
        format!("/admin/news/{}", id)
    }

    pub fn delete_news(id: i64) -> String {
        format!("/admin/news/{}", id)
    }
}

pub mod bookings {
    pub const CREATE: &str = "/bookings";
    pub const MY: &str = "/bookings/my";

    pub fn cancel(id: i64) -> String {
        format!("/bookings/{}/cancel", id)
    }
}

pub mod comments {
    pub const CREATE: &str = "/comments";
    pub const UPLOAD_IMAGE: &str = "/comments/upload-image";

    pub fn for_spot(spot_id: i64) -> String {
        format!("/comments/spot/{}", spot_id)
    }
}
