use crate::models::AppData;
use crate::stats::build_stats;

pub fn render_index(data: &AppData) -> String {
    let stats = build_stats(data);
    INDEX_HTML
        .replace("{{SELECTED_DAY}}", stats.selected_weekday.label())
        .replace("{{TODAY_RATE}}", &stats.today.rate.to_string())
        .replace("{{OVERALL_RATE}}", &stats.overall.rate.to_string())
        .replace("{{MOTIVATION}}", stats.motivation)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Weekly Task Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f6f2fb;
      --bg-2: #dcd2f5;
      --ink: #2b2a33;
      --accent: #8b5cf6;
      --accent-2: #2f4858;
      --weekend: #ec4899;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(70, 48, 120, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ece4fb 60%, #f9f2f9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5f5c67;
      font-size: 1rem;
    }

    .mode-card {
      display: grid;
      gap: 14px;
      justify-items: center;
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(70, 48, 120, 0.08);
    }

    .mode-buttons {
      display: flex;
      align-items: stretch;
      gap: 18px;
      flex-wrap: wrap;
      justify-content: center;
    }

    .mode-btn {
      appearance: none;
      border: none;
      border-radius: 16px;
      padding: 14px 22px;
      display: flex;
      align-items: center;
      gap: 12px;
      cursor: pointer;
      background: #f1eef8;
      color: #5f5c67;
      transition: transform 150ms ease, box-shadow 150ms ease;
      text-align: left;
    }

    .mode-btn .icon {
      font-size: 1.6rem;
    }

    .mode-btn .title {
      font-weight: 600;
      font-size: 0.95rem;
    }

    .mode-btn .hint-line {
      font-size: 0.78rem;
      opacity: 0.85;
    }

    .mode-btn.active-week {
      background: linear-gradient(90deg, #3b82f6, #8b5cf6);
      color: white;
      box-shadow: 0 10px 24px rgba(99, 102, 241, 0.3);
      transform: scale(1.03);
    }

    .mode-btn.active-weekend {
      background: linear-gradient(90deg, #ec4899, #8b5cf6);
      color: white;
      box-shadow: 0 10px 24px rgba(236, 72, 153, 0.3);
      transform: scale(1.03);
    }

    .mode-divider {
      width: 1px;
      background: rgba(70, 48, 120, 0.12);
    }

    .mode-description {
      font-size: 0.9rem;
      color: #5f5c67;
      margin: 0;
    }

    .mode-legend {
      display: flex;
      gap: 18px;
      font-size: 0.78rem;
      color: #8b857d;
    }

    .mode-legend .dot {
      display: inline-block;
      width: 8px;
      height: 8px;
      border-radius: 999px;
      margin-right: 6px;
    }

    .dot-week { background: #60a5fa; }
    .dot-weekend { background: #f472b6; }

    .day-tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(70, 48, 120, 0.08);
      border-radius: 999px;
      justify-content: center;
      flex-wrap: wrap;
    }

    .day-tab {
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 8px 14px;
      font-size: 0.9rem;
      font-weight: 600;
      color: #6b6475;
      cursor: pointer;
    }

    .day-tab.active {
      background: white;
      color: var(--accent);
      box-shadow: 0 8px 16px rgba(70, 48, 120, 0.12);
    }

    .stats-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
      gap: 16px;
    }

    .stat-card {
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(70, 48, 120, 0.08);
      display: grid;
      gap: 10px;
      justify-items: center;
      text-align: center;
    }

    .stat-card h3 {
      margin: 0;
      font-size: 1.05rem;
    }

    .stat-card .rate {
      font-size: 2rem;
      font-weight: 600;
      color: var(--accent);
    }

    .stat-card .emoji-circle {
      width: 64px;
      height: 64px;
      border-radius: 999px;
      display: grid;
      place-items: center;
      font-size: 1.9rem;
      background: linear-gradient(135deg, #ede9fe, #fce7f3);
    }

    .tier-chip {
      display: inline-flex;
      align-items: center;
      gap: 6px;
      padding: 4px 12px;
      border-radius: 999px;
      font-size: 0.82rem;
      font-weight: 600;
    }

    .tier-champion { color: #a16207; background: #fef9c3; }
    .tier-excellent { color: #15803d; background: #dcfce7; }
    .tier-good { color: #1d4ed8; background: #dbeafe; }
    .tier-progress { color: #7e22ce; background: #f3e8ff; }
    .tier-starting { color: #4b5563; background: #f3f4f6; }

    .count-line {
      font-size: 0.85rem;
      color: #8b857d;
      margin: 0;
    }

    .bar {
      width: 100%;
      height: 10px;
      background: #ece8f4;
      border-radius: 999px;
      overflow: hidden;
    }

    .bar-fill {
      height: 100%;
      background: linear-gradient(90deg, #8b5cf6, #ec4899);
      transition: width 400ms ease;
    }

    .breakdown {
      display: grid;
      gap: 8px;
      width: 100%;
    }

    .breakdown-row {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 10px;
      padding: 8px 10px;
      border-radius: 12px;
      background: #f7f5fb;
      font-size: 0.85rem;
    }

    .breakdown-row.selected {
      background: #f3e8ff;
      border: 1px solid #e9d5ff;
    }

    .breakdown-row .day-dot {
      display: inline-block;
      width: 12px;
      height: 12px;
      border-radius: 999px;
      margin-right: 8px;
    }

    .breakdown-row .mini-bar {
      width: 40px;
      height: 5px;
      background: #e5e0ef;
      border-radius: 999px;
      overflow: hidden;
    }

    .breakdown-row .mini-fill {
      height: 100%;
      background: var(--accent);
    }

    .quick-stats {
      display: grid;
      grid-template-columns: 1fr 1fr;
      gap: 10px;
      width: 100%;
      font-size: 0.8rem;
      text-align: center;
    }

    .quick-stats .done { background: #dcfce7; color: #15803d; border-radius: 10px; padding: 8px; }
    .quick-stats .todo { background: #dbeafe; color: #1d4ed8; border-radius: 10px; padding: 8px; }
    .quick-stats .num { font-weight: 600; font-size: 1rem; }

    .tasks-card {
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(70, 48, 120, 0.08);
      display: grid;
      gap: 14px;
    }

    .task-form {
      display: flex;
      gap: 10px;
      flex-wrap: wrap;
    }

    .task-form input[type="text"] {
      flex: 1;
      min-width: 180px;
      border: 1px solid rgba(70, 48, 120, 0.16);
      border-radius: 12px;
      padding: 10px 14px;
      font: inherit;
    }

    .task-form select {
      border: 1px solid rgba(70, 48, 120, 0.16);
      border-radius: 12px;
      padding: 10px 14px;
      font: inherit;
      background: white;
    }

    .task-form button {
      appearance: none;
      border: none;
      border-radius: 12px;
      padding: 10px 18px;
      font: inherit;
      font-weight: 600;
      background: var(--accent);
      color: white;
      cursor: pointer;
      box-shadow: 0 8px 18px rgba(139, 92, 246, 0.3);
    }

    .task-list {
      display: grid;
      gap: 8px;
      margin: 0;
      padding: 0;
      list-style: none;
    }

    .task-row {
      display: flex;
      align-items: center;
      gap: 10px;
      padding: 10px 12px;
      border-radius: 12px;
      background: #f7f5fb;
    }

    .task-row.done .title {
      text-decoration: line-through;
      color: #8b857d;
    }

    .task-row .title {
      flex: 1;
    }

    .task-row .day-chip {
      font-size: 0.75rem;
      font-weight: 600;
      color: white;
      padding: 3px 10px;
      border-radius: 999px;
    }

    .task-row .remove {
      background: none;
      border: none;
      cursor: pointer;
      color: #b4aec2;
      font-size: 1rem;
    }

    .status {
      font-size: 0.95rem;
      color: #6b6475;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      .mode-divider {
        display: none;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Weekly Task Tracker</h1>
      <p class="subtitle">Plan the week, tick things off, watch the progress climb.</p>
    </header>

    <section class="mode-card">
      <div class="mode-buttons">
        <button class="mode-btn" id="week-btn" type="button">
          <span class="icon">&#128197;</span>
          <span>
            <span class="title">Full Week</span><br />
            <span class="hint-line">Monday - Sunday</span>
          </span>
        </button>
        <div class="mode-divider"></div>
        <button class="mode-btn" id="weekend-btn" type="button">
          <span class="icon">&#127752;</span>
          <span>
            <span class="title">Weekend Mode</span><br />
            <span class="hint-line">Saturday &amp; Sunday</span>
          </span>
        </button>
      </div>
      <p class="mode-description" id="mode-description">View your complete weekly schedule and tasks</p>
      <div class="mode-legend">
        <span><span class="dot dot-week"></span>Weekdays</span>
        <span><span class="dot dot-weekend"></span>Weekends</span>
      </div>
    </section>

    <div class="day-tabs" id="day-tabs"></div>

    <section class="stats-grid">
      <div class="stat-card">
        <div class="emoji-circle" id="today-emoji">&#127793;</div>
        <h3 id="today-title">{{SELECTED_DAY}} Progress</h3>
        <div class="rate" id="today-rate">{{TODAY_RATE}}%</div>
        <span class="tier-chip tier-starting" id="today-tier"></span>
        <p class="count-line" id="today-counts"></p>
        <div class="bar"><div class="bar-fill" id="today-bar" style="width: 0%"></div></div>
      </div>

      <div class="stat-card">
        <div class="emoji-circle" id="overall-emoji">&#127793;</div>
        <h3 id="overall-title">Week Overview</h3>
        <div class="rate" id="overall-rate">{{OVERALL_RATE}}%</div>
        <span class="tier-chip tier-starting" id="overall-tier"></span>
        <p class="count-line" id="overall-counts"></p>
        <div class="bar"><div class="bar-fill" id="overall-bar" style="width: 0%"></div></div>
      </div>

      <div class="stat-card">
        <div class="emoji-circle">&#10024;</div>
        <h3>Daily Motivation</h3>
        <p class="count-line" id="motivation">{{MOTIVATION}}</p>
        <div class="breakdown" id="breakdown"></div>
        <div class="quick-stats" id="quick-stats"></div>
      </div>
    </section>

    <section class="tasks-card">
      <h3 style="margin: 0">Tasks</h3>
      <form class="task-form" id="task-form">
        <input type="text" id="task-title" placeholder="What needs doing?" />
        <select id="task-day">
          <option value="monday">Monday</option>
          <option value="tuesday">Tuesday</option>
          <option value="wednesday">Wednesday</option>
          <option value="thursday">Thursday</option>
          <option value="friday">Friday</option>
          <option value="saturday">Saturday</option>
          <option value="sunday">Sunday</option>
        </select>
        <button type="submit">Add task</button>
      </form>
      <ul class="task-list" id="task-list"></ul>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const dayTabsEl = document.getElementById('day-tabs');
    const breakdownEl = document.getElementById('breakdown');
    const quickStatsEl = document.getElementById('quick-stats');
    const taskListEl = document.getElementById('task-list');
    const modeDescriptionEl = document.getElementById('mode-description');
    const weekBtn = document.getElementById('week-btn');
    const weekendBtn = document.getElementById('weekend-btn');

    let stats = null;
    let tasks = [];

    const DAY_EMOJI = { saturday: '\u{1F389}', sunday: '\u{1F60C}' };

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const capitalize = (value) => value.charAt(0).toUpperCase() + value.slice(1);

    const renderScope = (prefix, scope, titleText) => {
      document.getElementById(prefix + '-emoji').textContent = scope.tier.emoji;
      document.getElementById(prefix + '-rate').textContent = scope.rate + '%';
      const tierEl = document.getElementById(prefix + '-tier');
      tierEl.textContent = scope.tier.emoji + ' ' + scope.tier.label;
      tierEl.className = 'tier-chip ' + scope.tier.color_class;
      document.getElementById(prefix + '-counts').textContent =
        scope.completed + ' of ' + scope.total + ' tasks completed';
      document.getElementById(prefix + '-bar').style.width = scope.rate + '%';
      if (titleText) {
        document.getElementById(prefix + '-title').textContent = titleText;
      }
    };

    const renderModeButtons = () => {
      weekBtn.className = 'mode-btn' + (stats.weekend_mode ? '' : ' active-week');
      weekendBtn.className = 'mode-btn' + (stats.weekend_mode ? ' active-weekend' : '');
      modeDescriptionEl.textContent = stats.weekend_mode
        ? '\u{1F38A} Focus on weekend activities and family time'
        : '\u{1F3AF} View your complete weekly schedule and tasks';
    };

    const renderDayTabs = () => {
      dayTabsEl.innerHTML = '';
      stats.weekly.forEach((day) => {
        const button = document.createElement('button');
        button.type = 'button';
        button.className = 'day-tab' + (day.day === stats.selected_weekday ? ' active' : '');
        button.textContent = day.label;
        button.addEventListener('click', () => selectDay(day.day));
        dayTabsEl.appendChild(button);
      });
    };

    const renderBreakdown = () => {
      breakdownEl.innerHTML = '';
      stats.weekly.forEach((day) => {
        const row = document.createElement('div');
        row.className = 'breakdown-row' + (day.day === stats.selected_weekday ? ' selected' : '');
        const badge = day.is_weekend ? ' ' + (DAY_EMOJI[day.day] || '') : '';
        row.innerHTML =
          '<span><span class="day-dot" style="background: ' + day.gradient + '"></span>' +
          day.label + badge + '</span>' +
          '<span>' + day.completed + '/' + day.total +
          ' <span class="mini-bar"><span class="mini-fill" style="width: ' + day.rate + '%; display: inline-block"></span></span></span>';
        breakdownEl.appendChild(row);
      });

      if (stats.overall.total > 0) {
        quickStatsEl.innerHTML =
          '<div class="done"><div class="num">' + stats.overall.completed + '</div>Done</div>' +
          '<div class="todo"><div class="num">' + stats.overall.remaining + '</div>To Do</div>';
      } else {
        quickStatsEl.innerHTML = '';
      }
    };

    const renderTasks = () => {
      taskListEl.innerHTML = '';
      const visible = stats.weekend_mode ? tasks.filter((task) => task.is_weekend) : tasks;
      visible.forEach((task) => {
        const day = stats.weekly.find((candidate) => candidate.day === task.weekday);
        const row = document.createElement('li');
        row.className = 'task-row' + (task.completed ? ' done' : '');
        const checkbox = document.createElement('input');
        checkbox.type = 'checkbox';
        checkbox.checked = task.completed;
        checkbox.addEventListener('change', () => toggleTask(task.id));
        const title = document.createElement('span');
        title.className = 'title';
        title.textContent = task.title;
        const chip = document.createElement('span');
        chip.className = 'day-chip';
        chip.textContent = capitalize(task.weekday).slice(0, 3);
        chip.style.background = day ? day.gradient : '#b4aec2';
        const remove = document.createElement('button');
        remove.type = 'button';
        remove.className = 'remove';
        remove.textContent = '✕';
        remove.addEventListener('click', () => removeTask(task.id));
        row.append(checkbox, title, chip, remove);
        taskListEl.appendChild(row);
      });
    };

    const renderAll = () => {
      if (!stats) {
        return;
      }
      renderScope('today', stats.today, capitalize(stats.selected_weekday) + ' Progress');
      renderScope('overall', stats.overall, stats.weekend_mode ? 'Weekend Overview' : 'Week Overview');
      document.getElementById('motivation').textContent = stats.motivation;
      renderModeButtons();
      renderDayTabs();
      renderBreakdown();
      renderTasks();
    };

    const loadStats = async () => {
      const res = await fetch('/api/stats');
      if (!res.ok) {
        throw new Error('Unable to load stats');
      }
      stats = await res.json();
    };

    const loadTasks = async () => {
      const res = await fetch('/api/tasks');
      if (!res.ok) {
        throw new Error('Unable to load tasks');
      }
      tasks = await res.json();
    };

    const refresh = async () => {
      await Promise.all([loadStats(), loadTasks()]);
      renderAll();
    };

    const post = async (url, body) => {
      const res = await fetch(url, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: body === undefined ? undefined : JSON.stringify(body)
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res;
    };

    const setMode = (weekend) => {
      post('/api/mode', { weekend })
        .then(refresh)
        .catch((err) => setStatus(err.message, 'error'));
    };

    const selectDay = (weekday) => {
      post('/api/day', { weekday })
        .then(refresh)
        .catch((err) => setStatus(err.message, 'error'));
    };

    const toggleTask = (id) => {
      post('/api/tasks/' + id + '/toggle')
        .then(refresh)
        .catch((err) => setStatus(err.message, 'error'));
    };

    const removeTask = (id) => {
      fetch('/api/tasks/' + id, { method: 'DELETE' })
        .then((res) => {
          if (!res.ok) {
            throw new Error('Unable to delete task');
          }
          return refresh();
        })
        .catch((err) => setStatus(err.message, 'error'));
    };

    weekBtn.addEventListener('click', () => setMode(false));
    weekendBtn.addEventListener('click', () => setMode(true));

    document.getElementById('task-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const titleInput = document.getElementById('task-title');
      const daySelect = document.getElementById('task-day');
      const title = titleInput.value.trim();
      if (!title) {
        setStatus('Give the task a name first.', 'error');
        return;
      }
      post('/api/tasks', { title, weekday: daySelect.value })
        .then(() => {
          titleInput.value = '';
          setStatus('Task added', 'ok');
          setTimeout(() => setStatus('', ''), 1200);
          return refresh();
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AppData, Weekday};

    #[test]
    fn render_substitutes_initial_values() {
        let mut data = AppData::default();
        data.selected_weekday = Weekday::Friday;
        data.add_task("ship it".into(), Weekday::Friday);

        let page = render_index(&data);
        assert!(page.contains("Friday Progress"));
        assert!(page.contains("0%"));
        assert!(!page.contains("{{SELECTED_DAY}}"));
        assert!(!page.contains("{{MOTIVATION}}"));
    }
}
