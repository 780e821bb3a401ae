/// モデル層
///
/// vid.me APIのJSONを写したドメインモデル・リクエストDTO・
/// レスポンスエンベロープと、形の揺れを吸収するserdeヘルパー。
pub mod entities;
pub mod enums;
pub mod requests;
pub mod responses;
pub mod serde_helpers;

pub use entities::{
    Application, Auth, Channel, Comment, Geofence, Notification, Page, Tag, User, UserTag, Video,
    VideoFormat, ViewerVote,
};
pub use enums::{
    AuthType, LocationOrderBy, NotificationType, Scope, SortDirection, SubscriptionType,
    VideoSource, Vote, WireEnum,
};
pub use requests::{AppRequest, LocationRequest, VideoRequest};
pub use responses::{
    AppsResponse, AuthResponse, ChannelResponse, ChannelsResponse, CommentResponse,
    CommentsResponse, CreateAppResponse, ErrorResponse, GeofencesResponse, IsFollowingResponse,
    NotificationsResponse, StatusResponse, TagsResponse, UserResponse, UserTagsResponse,
    UsersResponse, VideoInfoResponse, VideoRequestResponse, VideoResponse, VideoUploadResponse,
    VideosResponse, VoteResponse,
};
