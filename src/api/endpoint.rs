use std::fmt;

/// Remote API endpoints, relative to the base URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    MyProfile,
    AllPhotos,
    DraftList,
    DraftDetail,
    DraftPost,
    DraftUpdate,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Login => "login",
            Endpoint::MyProfile => "my_profile",
            Endpoint::AllPhotos => "album/photo/all",
            Endpoint::DraftList => "diary/draft/list",
            Endpoint::DraftDetail => "diary/draft/detail",
            Endpoint::DraftPost => "diary/draft/post",
            Endpoint::DraftUpdate => "diary/draft/update",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
