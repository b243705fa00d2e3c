mod common;

use actix_web::{http::StatusCode, test};
use common::{client::{send, TestClient}, test_data, TestContext};
use entity::role::Role;
use serde_json::json;
use uuid::Uuid;

fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}

#[tokio::test]
async fn test_workshop_flow_requires_token() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.config.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/workshop-requests/requests")
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "UNAUTHORIZED");
    assert_eq!(body["message"], "Invalid or missing token");

    let req = test::TestRequest::post()
        .uri("/api/workshop-requests/submit")
        .insert_header(bearer("not-a-jwt"))
        .set_json(test_data::workshop("Soldering 101"))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "UNAUTHORIZED");

    // Not a bearer scheme at all.
    let req = test::TestRequest::get()
        .uri("/api/workshop-requests/stats")
        .insert_header(("Authorization", "Basic dXNlcjpwYXNz"))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "UNAUTHORIZED");

    // Nothing was stored by the rejected submit.
    let member = client.create_user("quentin", "MAKERS", &[Role::ClubMember]).await;
    let req = test::TestRequest::get()
        .uri("/api/workshop-requests/stats")
        .insert_header(bearer(&client.token_for(&member)))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn test_workshop_flow_submit() {
    println!("\n\n[+] Running test: test_workshop_flow_submit");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.config.clone());
    let app = test::init_service(client.create_app()).await;

    let member = client.create_user("dana", "MAKERS", &[Role::ClubMember]).await;
    let token = client.token_for(&member);

    let req = test::TestRequest::post()
        .uri("/api/workshop-requests/submit")
        .insert_header(bearer(&token))
        .set_json(test_data::workshop("Soldering 101"))
        .to_request();
    let (status, body) = send(&app, req).await;
    println!("[<] Received response with status: {}", status);

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Workshop request submitted successfully");
    let id: Uuid = body["requestId"].as_str().unwrap().parse().unwrap();

    let stored = ctx.db.get_workshop_request(id).await.unwrap();
    assert_eq!(stored.requester_id, member.id);
    assert_eq!(stored.requester_name, "dana");
    assert_eq!(stored.club_code, "MAKERS");
    assert_eq!(stored.max_participants, 12);
    assert!(stored.status.is_pending());
    assert!(stored.admin_id.is_none());
    println!("[/] Test passed: Workshop request stored.");
}

#[tokio::test]
async fn test_workshop_flow_submit_rules() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.config.clone());
    let app = test::init_service(client.create_app()).await;

    // Admin-only accounts cannot propose workshops.
    let admin_only = client.create_user("eve", "MAKERS", &[Role::Admin]).await;
    let req = test::TestRequest::post()
        .uri("/api/workshop-requests/submit")
        .insert_header(bearer(&client.token_for(&admin_only)))
        .set_json(test_data::workshop("Soldering 101"))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Only club members can submit workshop requests");

    let member = client.create_user("finn", "MAKERS", &[Role::ClubMember]).await;
    let token = client.token_for(&member);

    let mut no_seats = test_data::workshop("Soldering 101");
    no_seats["maxParticipants"] = json!(0);
    let req = test::TestRequest::post()
        .uri("/api/workshop-requests/submit")
        .insert_header(bearer(&token))
        .set_json(no_seats)
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");

    let mut bad_date = test_data::workshop("Soldering 101");
    bad_date["date"] = json!("next tuesday");
    let req = test::TestRequest::post()
        .uri("/api/workshop-requests/submit")
        .insert_header(bearer(&token))
        .set_json(bad_date)
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_workshop_flow_listing_scope() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.config.clone());
    let app = test::init_service(client.create_app()).await;

    let admin = client.create_club_admin("gina", "MAKERS").await;
    let hank = client.create_user("hank", "MAKERS", &[Role::ClubMember]).await;
    let ivy = client.create_user("ivy", "MAKERS", &[Role::ClubMember]).await;
    let outsider = client.create_user("jon", "CHESS", &[Role::ClubMember]).await;

    for (user, name) in [(&hank, "Soldering 101"), (&ivy, "3D printing"), (&outsider, "Openings")] {
        let req = test::TestRequest::post()
            .uri("/api/workshop-requests/submit")
            .insert_header(bearer(&client.token_for(user)))
            .set_json(test_data::workshop(name))
            .to_request();
        let (status, _) = send(&app, req).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let req = test::TestRequest::get()
        .uri("/api/workshop-requests/requests")
        .insert_header(bearer(&client.token_for(&hank)))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["workshopName"], "Soldering 101");

    let req = test::TestRequest::get()
        .uri("/api/workshop-requests/requests")
        .insert_header(bearer(&client.token_for(&admin)))
        .to_request();
    let (_, body) = send(&app, req).await;
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert!(list.iter().all(|r| r["clubCode"] == "MAKERS"));
}

#[tokio::test]
async fn test_workshop_flow_decisions() {
    println!("\n\n[+] Running test: test_workshop_flow_decisions");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.config.clone());
    let app = test::init_service(client.create_app()).await;

    let admin = client.create_club_admin("kate", "MAKERS").await;
    let other_admin = client.create_club_admin("leo", "CHESS").await;
    let member = client.create_user("mia", "MAKERS", &[Role::ClubMember]).await;

    let submit = |name: &str| {
        test::TestRequest::post()
            .uri("/api/workshop-requests/submit")
            .insert_header(bearer(&client.token_for(&member)))
            .set_json(test_data::workshop(name))
            .to_request()
    };
    let (_, body) = send(&app, submit("Soldering 101")).await;
    let first = body["requestId"].as_str().unwrap().to_string();
    let (_, body) = send(&app, submit("3D printing")).await;
    let second = body["requestId"].as_str().unwrap().to_string();

    // Members cannot decide.
    let req = test::TestRequest::put()
        .uri(&format!("/api/workshop-requests/approve/{first}"))
        .insert_header(bearer(&client.token_for(&member)))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Only admins can approve workshop requests");

    // Neither can admins of other clubs.
    let req = test::TestRequest::put()
        .uri(&format!("/api/workshop-requests/approve/{first}"))
        .insert_header(bearer(&client.token_for(&other_admin)))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "You can only approve requests from your club");

    // Approve without a body: default response.
    let req = test::TestRequest::put()
        .uri(&format!("/api/workshop-requests/approve/{first}"))
        .insert_header(bearer(&client.token_for(&admin)))
        .to_request();
    let (status, body) = send(&app, req).await;
    println!("[<] Approval status: {}", status);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Workshop request approved successfully");
    assert_eq!(body["request"]["status"], "approved");
    assert_eq!(body["request"]["adminResponse"], "Request approved");
    assert_eq!(body["request"]["adminName"], "kate");
    assert_eq!(body["request"]["adminId"], admin.id.to_string());

    // Decisions are final.
    let req = test::TestRequest::put()
        .uri(&format!("/api/workshop-requests/reject/{first}"))
        .insert_header(bearer(&client.token_for(&admin)))
        .set_json(json!({ "adminResponse": "Changed my mind" }))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Request has already been processed");

    let req = test::TestRequest::put()
        .uri(&format!("/api/workshop-requests/reject/{second}"))
        .insert_header(bearer(&client.token_for(&admin)))
        .set_json(json!({ "adminResponse": "Printer is broken this month" }))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Workshop request rejected");
    assert_eq!(body["request"]["status"], "rejected");
    assert_eq!(body["request"]["adminResponse"], "Printer is broken this month");

    let req = test::TestRequest::put()
        .uri(&format!("/api/workshop-requests/approve/{}", Uuid::new_v4()))
        .insert_header(bearer(&client.token_for(&admin)))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Workshop request not found");

    let req = test::TestRequest::put()
        .uri("/api/workshop-requests/approve/42")
        .insert_header(bearer(&client.token_for(&admin)))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
    println!("[/] Test passed: Workshop decisions.");
}

#[tokio::test]
async fn test_workshop_flow_stats() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.config.clone());
    let app = test::init_service(client.create_app()).await;

    let admin = client.create_club_admin("nora", "MAKERS").await;
    let owen = client.create_user("owen", "MAKERS", &[Role::ClubMember]).await;
    let pia = client.create_user("pia", "MAKERS", &[Role::ClubMember]).await;

    let mut ids = Vec::new();
    for (user, name) in [(&owen, "Soldering 101"), (&owen, "Arduino"), (&pia, "3D printing")] {
        let req = test::TestRequest::post()
            .uri("/api/workshop-requests/submit")
            .insert_header(bearer(&client.token_for(user)))
            .set_json(test_data::workshop(name))
            .to_request();
        let (_, body) = send(&app, req).await;
        ids.push(body["requestId"].as_str().unwrap().to_string());
    }

    for (id, verb) in [(&ids[0], "approve"), (&ids[2], "reject")] {
        let req = test::TestRequest::put()
            .uri(&format!("/api/workshop-requests/{verb}/{id}"))
            .insert_header(bearer(&client.token_for(&admin)))
            .to_request();
        let (status, _) = send(&app, req).await;
        assert_eq!(status, StatusCode::OK);
    }

    let req = test::TestRequest::get()
        .uri("/api/workshop-requests/stats")
        .insert_header(bearer(&client.token_for(&admin)))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "total": 3, "pending": 1, "approved": 1, "rejected": 1 }));

    let req = test::TestRequest::get()
        .uri("/api/workshop-requests/stats")
        .insert_header(bearer(&client.token_for(&owen)))
        .to_request();
    let (_, body) = send(&app, req).await;
    assert_eq!(body, json!({ "total": 2, "pending": 1, "approved": 1, "rejected": 0 }));
}
