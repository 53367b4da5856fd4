/*
 * Responsibility
 * - Handler から見える「認証済みユーザー」の型
 * - middleware が AuthScheme で解決して request extensions に格納し、handler はこの型だけを受け取る
 */
use crate::repos::user_repo::User;

/// The user the request authenticated as.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

