use helia_db::dedup::models::DuplicateReview;

pub fn format_reviews_csv(reviews: &[DuplicateReview]) -> String {
    let mut out =
        String::from("id,project_a_id,project_b_id,decision,reviewed_by,reviewed_at\n");
    for review in reviews {
        out.push_str(&format!(
            "{},{},{},{},{},{}\n",
            review.id,
            review.project_a_id,
            review.project_b_id,
            review.decision.as_str(),
            review.reviewed_by,
            review.reviewed_at.to_rfc3339(),
        ));
    }
    out
}
