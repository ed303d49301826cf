//! Verification email templates
//!
//! The HTML and plain text renderings are parameterized only by the
//! verification link; branding strings are fixed.

/// Build the verification link for a token.
///
/// The token is opaque and may contain reserved URL characters, so it is
/// always percent-encoded before being placed in the query string.
pub fn verification_url(site_url: &str, token: &str) -> String {
    format!(
        "{}/verify.html?token={}",
        site_url.trim_end_matches('/'),
        urlencoding::encode(token)
    )
}

/// Render the HTML body of the verification email
pub fn render_html(verification_url: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>ClubJoin - Confirm your email</title>
  <style>
    body {{
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif;
      line-height: 1.6;
      color: #2d2d2d;
      background: #f8f9fa;
      margin: 0;
      padding: 20px;
    }}
    .container {{
      max-width: 600px;
      margin: 0 auto;
      background: white;
      border-radius: 20px;
      overflow: hidden;
    }}
    .header {{
      background: linear-gradient(135deg, #dc474b 0%, #b8383b 100%);
      padding: 50px 20px;
      text-align: center;
    }}
    .header h1 {{
      margin: 0;
      font-size: 32px;
      color: white;
    }}
    .content {{
      padding: 50px 30px;
      text-align: center;
    }}
    .cta-button {{
      display: inline-block;
      background: linear-gradient(135deg, #dc474b 0%, #b8383b 100%);
      color: white;
      padding: 18px 40px;
      text-decoration: none;
      border-radius: 50px;
      font-weight: 600;
      font-size: 18px;
      margin: 30px 0;
    }}
    .security-note {{
      background: #f0f9ff;
      border: 1px solid #bae6fd;
      border-radius: 12px;
      padding: 20px;
      margin: 40px 0;
      font-size: 15px;
      color: #0c4a6e;
    }}
    .fallback-link a {{
      color: #dc474b;
      word-break: break-all;
    }}
    .footer {{
      background: #1a1a1a;
      padding: 30px 20px;
      text-align: center;
      color: #cccccc;
      font-size: 14px;
    }}
  </style>
</head>
<body>
  <div class="container">
    <div class="header">
      <h1>Welcome to ClubJoin!</h1>
    </div>
    <div class="content">
      <h2>Almost there!</h2>
      <p>
        Thanks for your interest in the ClubJoin Early Access.<br>
        <strong>One click left:</strong> confirm your email address to join.
      </p>
      <a href="{url}" class="cta-button">Confirm email address</a>
      <div class="security-note">
        <strong>Security note:</strong><br>
        This link can be used once and expires after 24 hours.
        If you did not sign up, simply ignore this email.
      </div>
      <div class="fallback-link">
        <p><strong>Button not working?</strong></p>
        <p>Copy this link into your browser:</p>
        <a href="{url}">{url}</a>
      </div>
    </div>
    <div class="footer">
      <p><strong>ClubJoin</strong></p>
      <p>This email was sent automatically.</p>
    </div>
  </div>
</body>
</html>"#,
        url = verification_url
    )
}

/// Render the plain text body of the verification email
pub fn render_text(verification_url: &str) -> String {
    format!(
        "ClubJoin - Confirm your email\n\
         \n\
         Welcome to ClubJoin!\n\
         \n\
         Thanks for your interest in the ClubJoin Early Access.\n\
         Please confirm your email address to complete your signup.\n\
         \n\
         Click this link or copy it into your browser:\n\
         {url}\n\
         \n\
         Security note:\n\
         This link can be used once and expires after 24 hours.\n\
         If you did not sign up, simply ignore this email.\n\
         \n\
         ---\n\
         ClubJoin\n\
         This email was sent automatically.\n",
        url = verification_url
    )
}
