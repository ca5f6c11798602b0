//! Data models for the Dropbox sharing API.
//!
//! Dropbox encodes union types on the wire as objects with a `.tag`
//! discriminant. Each union used here is a closed enum with an `Unknown`
//! fallback so that tags added by the provider later still deserialize.

use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Level of access a member holds on a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum AccessLevel {
    Owner,
    Editor,
    Viewer,
    ViewerNoComment,
    #[serde(other)]
    Unknown,
}

impl AccessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::Owner => "owner",
            AccessLevel::Editor => "editor",
            AccessLevel::Viewer => "viewer",
            AccessLevel::ViewerNoComment => "viewer_no_comment",
            AccessLevel::Unknown => "unknown",
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Platform a user was last seen on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum PlatformType {
    Web,
    Desktop,
    Mobile,
    MobileIos,
    MobileAndroid,
    Api,
    #[serde(other)]
    Unknown,
}

/// Who administers a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum GroupManagementType {
    UserManaged,
    CompanyManaged,
    SystemManaged,
    #[serde(other)]
    Unknown,
}

/// How a group was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum GroupType {
    Team,
    UserManaged,
    #[serde(other)]
    Unknown,
}

/// Action a permission entry allows or denies on a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum MemberAction {
    LeaveACopy,
    MakeEditor,
    MakeOwner,
    MakeViewer,
    MakeViewerNoComment,
    Remove,
    #[serde(other)]
    Unknown,
}

/// One entry of a member's permission list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberPermission {
    pub action: MemberAction,
    pub allow: bool,
}

/// Account details of a user member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub account_id: String,
    pub email: String,
    pub display_name: String,
    #[serde(default)]
    pub same_team: bool,
    #[serde(default)]
    pub team_member_id: Option<String>,
}

/// A user with access to the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserMembershipInfo {
    pub access_type: AccessLevel,
    pub user: UserInfo,
    #[serde(default)]
    pub permissions: Vec<MemberPermission>,
    #[serde(default)]
    pub is_inherited: bool,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub time_last_seen: Option<OffsetDateTime>,
    #[serde(default)]
    pub platform_type: Option<PlatformType>,
}

impl fmt::Display for UserMembershipInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\tuser\t{}\t{}{}",
            self.access_type,
            self.user.email,
            self.user.display_name,
            inherited_marker(self.is_inherited)
        )
    }
}

/// Details of a group member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupInfo {
    pub group_name: String,
    pub group_id: String,
    pub group_management_type: GroupManagementType,
    pub group_type: GroupType,
    #[serde(default)]
    pub is_member: bool,
    #[serde(default)]
    pub is_owner: bool,
    #[serde(default)]
    pub same_team: bool,
    #[serde(default)]
    pub member_count: Option<u32>,
}

/// A group with access to the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupMembershipInfo {
    pub access_type: AccessLevel,
    pub group: GroupInfo,
    #[serde(default)]
    pub permissions: Vec<MemberPermission>,
    #[serde(default)]
    pub is_inherited: bool,
}

impl fmt::Display for GroupMembershipInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\tgroup\t{}\t{}{}",
            self.access_type,
            self.group.group_id,
            self.group.group_name,
            inherited_marker(self.is_inherited)
        )
    }
}

/// Identity of a pending invitee, not yet resolved to an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum InviteeInfo {
    Email { email: String },
    #[serde(other)]
    Unknown,
}

/// An invitee with a pending invitation to the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InviteeMembershipInfo {
    pub access_type: AccessLevel,
    pub invitee: InviteeInfo,
    #[serde(default)]
    pub permissions: Vec<MemberPermission>,
    #[serde(default)]
    pub is_inherited: bool,
}

impl fmt::Display for InviteeMembershipInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let email = match &self.invitee {
            InviteeInfo::Email { email } => email.as_str(),
            InviteeInfo::Unknown => "-",
        };
        write!(
            f,
            "{}\tinvitee\t{}\t(pending){}",
            self.access_type,
            email,
            inherited_marker(self.is_inherited)
        )
    }
}

fn inherited_marker(is_inherited: bool) -> &'static str {
    if is_inherited {
        "\t(inherited)"
    } else {
        ""
    }
}

/// Request body for `sharing/list_file_members`.
#[derive(Debug, Serialize)]
pub struct ListFileMembersArg {
    pub file: String,
    pub include_inherited: bool,
    pub limit: u32,
}

/// Request body for `sharing/list_file_members/continue`.
#[derive(Debug, Serialize)]
pub struct ListFileMembersContinueArg {
    pub cursor: String,
}

/// One page of results from the list_file_members endpoints.
///
/// A present `cursor` means more pages exist; an absent one marks the
/// terminal page.
#[derive(Debug, Deserialize)]
pub struct SharedFileMembers {
    #[serde(default)]
    pub users: Vec<UserMembershipInfo>,
    #[serde(default)]
    pub groups: Vec<GroupMembershipInfo>,
    #[serde(default)]
    pub invitees: Vec<InviteeMembershipInfo>,
    #[serde(default)]
    pub cursor: Option<String>,
}

/// All members of a file, aggregated across pages in fetch order.
#[derive(Debug, Default)]
pub struct FileMembers {
    pub users: Vec<UserMembershipInfo>,
    pub groups: Vec<GroupMembershipInfo>,
    pub invitees: Vec<InviteeMembershipInfo>,
}

impl FileMembers {
    /// Total number of member entries across all three kinds.
    pub fn len(&self) -> usize {
        self.users.len() + self.groups.len() + self.invitees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Dropbox API error response body.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error_summary: String,
}
