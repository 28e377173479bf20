use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::users::user::{User, UserStatus};

/// 회원가입 응답 DTO
///
/// 공개 가능한 필드만 담으며 비밀번호 해시는 포함하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserResponse {
    pub id_user: Uuid,
    pub name: String,
    pub email: String,
    pub status: UserStatus,
}

impl From<User> for RegisterUserResponse {
    fn from(user: User) -> Self {
        let User {
            id_user,
            name,
            email,
            status,
            ..
        } = user;

        Self {
            id_user,
            name,
            email,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_hides_password() {
        let user = User::new(
            "Maria".to_string(),
            "maria@email.com",
            "$2b$04$secret-hash".to_string(),
            UserStatus::Pending,
        );
        let json = serde_json::to_value(RegisterUserResponse::from(user)).unwrap();

        assert!(json.get("idUser").is_some());
        assert_eq!(json["status"], "PENDING");
        assert!(json.get("password").is_none());
        assert!(!json.to_string().contains("secret-hash"));
    }
}
