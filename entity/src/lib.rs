pub mod registration_request;
pub mod role;
pub mod status;
pub mod user;
pub mod workshop_request;

/*
 Everything is partitioned by club code. A club has at most one admin, who is also a member.
 Users never sign up directly into a role through the approval flow: a registration request is
 filed, approved by the system admin (club admins) or the club's admin (members), and only then
 does a user row exist or gain the requested roles.
 Workshop requests are filed by members and decided by the admin of the same club.
 */
