//! The four page views. Thin presentation layer; every interesting thing
//! happens behind `/api/*`.

use axum::response::Html;

pub async fn home_page() -> Html<&'static str> {
    Html(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Lipika</title>
</head>
<body>
  <h1>Lipika</h1>
  <p>Scan Hindi text and chat about it.</p>
  <nav>
    <a href="/upload">Upload a scan</a> |
    <a href="/result">View result</a> |
    <a href="/chatbot">Chatbot</a>
  </nav>
</body>
</html>
"#,
    )
}

pub async fn upload_page() -> Html<&'static str> {
    Html(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Lipika - Upload</title>
</head>
<body>
  <h1>Upload a scan</h1>
  <form method="post" action="/api/upload" enctype="multipart/form-data">
    <input type="file" name="file" accept=".png,.jpg,.jpeg">
    <button type="submit">Upload</button>
  </form>
  <p><a href="/">Home</a></p>
</body>
</html>
"#,
    )
}

pub async fn result_page() -> Html<&'static str> {
    Html(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Lipika - Result</title>
</head>
<body>
  <h1>Scan result</h1>
  <p>Your most recent scan is stored on the server. Ask the
  <a href="/chatbot">chatbot</a> about the text it contains.</p>
  <p><a href="/">Home</a></p>
</body>
</html>
"#,
    )
}

pub async fn chatbot_page() -> Html<&'static str> {
    Html(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Lipika - Chatbot</title>
</head>
<body>
  <h1>Chatbot</h1>
  <div id="log"></div>
  <form id="chat">
    <input id="message" autocomplete="off" placeholder="Ask something...">
    <button type="submit">Send</button>
  </form>
  <p><a href="/">Home</a></p>
  <script>
    const log = document.getElementById('log');
    const append = (who, text) => {
      const p = document.createElement('p');
      p.textContent = who + ': ' + text;
      log.appendChild(p);
    };
    document.getElementById('chat').addEventListener('submit', async (e) => {
      e.preventDefault();
      const input = document.getElementById('message');
      const message = input.value.trim();
      if (!message) return;
      input.value = '';
      append('you', message);
      try {
        const resp = await fetch('/api/chat', {
          method: 'POST',
          headers: {'Content-Type': 'application/json'},
          body: JSON.stringify({message})
        });
        const data = await resp.json();
        append('gemini', resp.ok ? data.reply : (data.error?.message || 'request failed'));
      } catch (err) {
        append('gemini', 'request failed: ' + err);
      }
    });
  </script>
</body>
</html>
"#,
    )
}
