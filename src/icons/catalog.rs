//! Built-in icon catalog
//!
//! Icon data is taken verbatim from the Lucide icon set (ISC license).
//! Each entry becomes a lazily created static; aliases are re-exports of
//! the same static.

icons! {
    ACTIVITY = "Activity" [
        path { d: "M22 12h-2.48a2 2 0 0 0-1.93 1.46l-2.35 8.36a.25.25 0 0 1-.48 0L9.24 2.18a.25.25 0 0 0-.48 0l-2.35 8.36A2 2 0 0 1 4.49 12H2" },
    ];
    AIRPLAY = "Airplay" [
        path { d: "M5 17H4a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2h-1" },
        path { d: "m12 15 5 6H7Z" },
    ];
    ALARM_CLOCK = "AlarmClock" [
        circle { cx: "12", cy: "13", r: "8" },
        path { d: "M12 9v4l2 2" },
        path { d: "M5 3 2 6" },
        path { d: "m22 6-3-3" },
        path { d: "M6.38 18.7 4 21" },
        path { d: "M17.64 18.67 20 21" },
    ];
    ALBUM = "Album" [
        rect { x: "3", y: "3", width: "18", height: "18", rx: "2", ry: "2" },
        polyline { points: "11 3 11 11 14 8 17 11 17 3" },
    ];
    AMBULANCE = "Ambulance" [
        path { d: "M10 10H6" },
        path { d: "M14 18V6a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2v11a1 1 0 0 0 1 1h2" },
        path { d: "M19 18h2a1 1 0 0 0 1-1v-3.28a1 1 0 0 0-.684-.948l-1.923-.641a1 1 0 0 1-.578-.502l-1.539-3.076A1 1 0 0 0 16.382 8H14" },
        path { d: "M8 8v4" },
        path { d: "M9 18h6" },
        circle { cx: "17", cy: "18", r: "2" },
        circle { cx: "7", cy: "18", r: "2" },
    ];
    ARROW_DOWN = "ArrowDown" [
        path { d: "M12 5v14" },
        path { d: "m19 12-7 7-7-7" },
    ];
    ARROW_LEFT = "ArrowLeft" [
        path { d: "m12 19-7-7 7-7" },
        path { d: "M19 12H5" },
    ];
    ARROW_RIGHT = "ArrowRight" [
        path { d: "M5 12h14" },
        path { d: "m12 5 7 7-7 7" },
    ];
    ARROW_UP = "ArrowUp" [
        path { d: "m5 12 7-7 7 7" },
        path { d: "M12 19V5" },
    ];
    BADGE_CHECK = "BadgeCheck" [
        path { d: "M3.85 8.62a4 4 0 0 1 4.78-4.77 4 4 0 0 1 6.74 0 4 4 0 0 1 4.78 4.78 4 4 0 0 1 0 6.74 4 4 0 0 1-4.77 4.78 4 4 0 0 1-6.75 0 4 4 0 0 1-4.78-4.77 4 4 0 0 1 0-6.76Z" },
        path { d: "m9 12 2 2 4-4" },
    ] as VERIFIED = "Verified";
    BELL = "Bell" [
        path { d: "M10.268 21a2 2 0 0 0 3.464 0" },
        path { d: "M3.262 15.326A1 1 0 0 0 4 17h16a1 1 0 0 0 .74-1.673C19.41 13.956 18 12.499 18 8A6 6 0 0 0 6 8c0 4.499-1.411 5.956-2.738 7.326" },
    ];
    BOOKMARK = "Bookmark" [
        path { d: "m19 21-7-4-7 4V5a2 2 0 0 1 2-2h10a2 2 0 0 1 2 2v16z" },
    ];
    CALENDAR = "Calendar" [
        path { d: "M8 2v4" },
        path { d: "M16 2v4" },
        rect { x: "3", y: "4", width: "18", height: "18", rx: "2" },
        path { d: "M3 10h18" },
    ];
    CAMERA = "Camera" [
        path { d: "M13.997 4a2 2 0 0 1 1.76 1.05l.486.9A2 2 0 0 0 18.003 7H20a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V9a2 2 0 0 1 2-2h1.997a2 2 0 0 0 1.759-1.048l.489-.904A2 2 0 0 1 10.004 4z" },
        circle { cx: "12", cy: "13", r: "3" },
    ];
    CHECK = "Check" [
        path { d: "M20 6 9 17l-5-5" },
    ];
    CHEVRON_DOWN = "ChevronDown" [
        path { d: "m6 9 6 6 6-6" },
    ];
    CHEVRON_LEFT = "ChevronLeft" [
        path { d: "m15 18-6-6 6-6" },
    ];
    CHEVRON_RIGHT = "ChevronRight" [
        path { d: "m9 18 6-6-6-6" },
    ];
    CHEVRON_UP = "ChevronUp" [
        path { d: "m18 15-6-6-6 6" },
    ];
    CIRCLE_ALERT = "CircleAlert" [
        circle { cx: "12", cy: "12", r: "10" },
        line { x1: "12", y1: "8", x2: "12", y2: "12" },
        line { x1: "12", y1: "16", x2: "12.01", y2: "16" },
    ] as ALERT_CIRCLE = "AlertCircle";
    CIRCLE_CHECK = "CircleCheck" [
        circle { cx: "12", cy: "12", r: "10" },
        path { d: "m9 12 2 2 4-4" },
    ] as CHECK_CIRCLE_2 = "CheckCircle2";
    CIRCLE_CHECK_BIG = "CircleCheckBig" [
        path { d: "M21.801 10A10 10 0 1 1 17 3.335" },
        path { d: "m9 11 3 3L22 4" },
    ] as CHECK_CIRCLE = "CheckCircle";
    CIRCLE_MINUS = "CircleMinus" [
        circle { cx: "12", cy: "12", r: "10" },
        path { d: "M8 12h8" },
    ] as MINUS_CIRCLE = "MinusCircle";
    CIRCLE_PAUSE = "CirclePause" [
        circle { cx: "12", cy: "12", r: "10" },
        line { x1: "10", y1: "15", x2: "10", y2: "9" },
        line { x1: "14", y1: "15", x2: "14", y2: "9" },
    ] as PAUSE_CIRCLE = "PauseCircle";
    CIRCLE_PLAY = "CirclePlay" [
        path { d: "M9 9.003a1 1 0 0 1 1.517-.859l4.997 2.997a1 1 0 0 1 0 1.718l-4.997 2.997A1 1 0 0 1 9 14.996z" },
        circle { cx: "12", cy: "12", r: "10" },
    ] as PLAY_CIRCLE = "PlayCircle";
    CIRCLE_PLUS = "CirclePlus" [
        circle { cx: "12", cy: "12", r: "10" },
        path { d: "M8 12h8" },
        path { d: "M12 8v8" },
    ] as PLUS_CIRCLE = "PlusCircle";
    CIRCLE_STOP = "CircleStop" [
        circle { cx: "12", cy: "12", r: "10" },
        rect { x: "9", y: "9", width: "6", height: "6", rx: "1" },
    ] as STOP_CIRCLE = "StopCircle";
    CIRCLE_USER = "CircleUser" [
        circle { cx: "12", cy: "12", r: "10" },
        circle { cx: "12", cy: "10", r: "3" },
        path { d: "M7 20.662V19a2 2 0 0 1 2-2h6a2 2 0 0 1 2 2v1.662" },
    ] as USER_CIRCLE = "UserCircle";
    CIRCLE_X = "CircleX" [
        circle { cx: "12", cy: "12", r: "10" },
        path { d: "m15 9-6 6" },
        path { d: "m9 9 6 6" },
    ] as X_CIRCLE = "XCircle";
    CLOCK = "Clock" [
        path { d: "M12 6v6l4 2" },
        circle { cx: "12", cy: "12", r: "10" },
    ];
    CLOUD = "Cloud" [
        path { d: "M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z" },
    ];
    CODE = "Code" [
        path { d: "m16 18 6-6-6-6" },
        path { d: "m8 6-6 6 6 6" },
    ];
    COLUMNS_2 = "Columns2" [
        rect { x: "3", y: "3", width: "18", height: "18", rx: "2" },
        path { d: "M12 3v18" },
    ] as COLUMNS = "Columns";
    COPY = "Copy" [
        rect { x: "8", y: "8", width: "14", height: "14", rx: "2", ry: "2" },
        path { d: "M4 16c-1.1 0-2-.9-2-2V4c0-1.1.9-2 2-2h10c1.1 0 2 .9 2 2" },
    ];
    DATABASE = "Database" [
        ellipse { cx: "12", cy: "5", rx: "9", ry: "3" },
        path { d: "M3 5V19A9 3 0 0 0 21 19V5" },
        path { d: "M3 12A9 3 0 0 0 21 12" },
    ];
    DOWNLOAD = "Download" [
        path { d: "M12 15V3" },
        path { d: "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" },
        path { d: "m7 10 5 5 5-5" },
    ];
    EARTH = "Earth" [
        path { d: "M21.54 15H17a2 2 0 0 0-2 2v4.54" },
        path { d: "M7 3.34V5a3 3 0 0 0 3 3a2 2 0 0 1 2 2c0 1.1.9 2 2 2a2 2 0 0 0 2-2c0-1.1.9-2 2-2h3.17" },
        path { d: "M11 21.95V18a2 2 0 0 0-2-2a2 2 0 0 1-2-2v-1a2 2 0 0 0-2-2H2.05" },
        circle { cx: "12", cy: "12", r: "10" },
    ] as GLOBE_2 = "Globe2";
    ELLIPSIS = "Ellipsis" [
        circle { cx: "12", cy: "12", r: "1" },
        circle { cx: "19", cy: "12", r: "1" },
        circle { cx: "5", cy: "12", r: "1" },
    ] as MORE_HORIZONTAL = "MoreHorizontal";
    ELLIPSIS_VERTICAL = "EllipsisVertical" [
        circle { cx: "12", cy: "12", r: "1" },
        circle { cx: "12", cy: "5", r: "1" },
        circle { cx: "12", cy: "19", r: "1" },
    ] as MORE_VERTICAL = "MoreVertical";
    EXTERNAL_LINK = "ExternalLink" [
        path { d: "M15 3h6v6" },
        path { d: "M10 14 21 3" },
        path { d: "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" },
    ];
    EYE = "Eye" [
        path { d: "M2.062 12.348a1 1 0 0 1 0-.696 10.75 10.75 0 0 1 19.876 0 1 1 0 0 1 0 .696 10.75 10.75 0 0 1-19.876 0" },
        circle { cx: "12", cy: "12", r: "3" },
    ];
    EYE_OFF = "EyeOff" [
        path { d: "M10.733 5.076a10.744 10.744 0 0 1 11.205 6.575 1 1 0 0 1 0 .696 10.747 10.747 0 0 1-1.444 2.49" },
        path { d: "M14.084 14.158a3 3 0 0 1-4.242-4.242" },
        path { d: "M17.479 17.499a10.75 10.75 0 0 1-15.417-5.151 1 1 0 0 1 0-.696 10.75 10.75 0 0 1 4.446-5.143" },
        path { d: "m2 2 20 20" },
    ];
    FILE = "File" [
        path { d: "M6 22a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h8a2.4 2.4 0 0 1 1.704.706l3.588 3.588A2.4 2.4 0 0 1 20 8v12a2 2 0 0 1-2 2z" },
        path { d: "M14 2v5a1 1 0 0 0 1 1h5" },
    ];
    FILE_TEXT = "FileText" [
        path { d: "M6 22a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h8a2.4 2.4 0 0 1 1.704.706l3.588 3.588A2.4 2.4 0 0 1 20 8v12a2 2 0 0 1-2 2z" },
        path { d: "M14 2v5a1 1 0 0 0 1 1h5" },
        path { d: "M10 9H8" },
        path { d: "M16 13H8" },
        path { d: "M16 17H8" },
    ];
    FOLDER = "Folder" [
        path { d: "M20 20a2 2 0 0 0 2-2V8a2 2 0 0 0-2-2h-7.9a2 2 0 0 1-1.69-.9L9.6 3.9A2 2 0 0 0 7.93 3H4a2 2 0 0 0-2 2v13a2 2 0 0 0 2 2Z" },
    ];
    FUNNEL = "Funnel" [
        path { d: "M10 20a1 1 0 0 0 .553.895l2 1A1 1 0 0 0 14 21v-7a2 2 0 0 1 .517-1.341L21.74 4.67A1 1 0 0 0 21 3H3a1 1 0 0 0-.742 1.67l7.225 7.989A2 2 0 0 1 10 14z" },
    ] as FILTER = "Filter";
    GIT_BRANCH = "GitBranch" [
        line { x1: "6", y1: "3", x2: "6", y2: "15" },
        circle { cx: "18", cy: "6", r: "3" },
        circle { cx: "6", cy: "18", r: "3" },
        path { d: "M18 9a9 9 0 0 1-9 9" },
    ];
    GITHUB = "Github" [
        path { d: "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4" },
        path { d: "M9 18c-4.51 2-5-2-7-2" },
    ];
    GLOBE = "Globe" [
        circle { cx: "12", cy: "12", r: "10" },
        path { d: "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20" },
        path { d: "M2 12h20" },
    ];
    GRID_3X3 = "Grid3x3" [
        rect { x: "3", y: "3", width: "18", height: "18", rx: "2" },
        path { d: "M3 9h18" },
        path { d: "M3 15h18" },
        path { d: "M9 3v18" },
        path { d: "M15 3v18" },
    ] as GRID = "Grid";
    HEART = "Heart" [
        path { d: "M2 9.5a5.5 5.5 0 0 1 9.591-3.676.56.56 0 0 0 .818 0A5.49 5.49 0 0 1 22 9.5c0 2.29-1.5 4-3 5.5l-5.492 5.313a2 2 0 0 1-3 .019L5 15c-1.5-1.5-3-3.2-3-5.5" },
    ];
    HOUSE = "House" [
        path { d: "M15 21v-8a1 1 0 0 0-1-1h-4a1 1 0 0 0-1 1v8" },
        path { d: "M3 10a2 2 0 0 1 .709-1.528l7-6a2 2 0 0 1 2.582 0l7 6A2 2 0 0 1 21 10v9a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" },
    ] as HOME = "Home";
    IMAGE = "Image" [
        rect { x: "3", y: "3", width: "18", height: "18", rx: "2", ry: "2" },
        circle { cx: "9", cy: "9", r: "2" },
        path { d: "m21 15-3.086-3.086a2 2 0 0 0-2.828 0L6 21" },
    ];
    INFO = "Info" [
        circle { cx: "12", cy: "12", r: "10" },
        path { d: "M12 16v-4" },
        path { d: "M12 8h.01" },
    ];
    KEY = "Key" [
        path { d: "m15.5 7.5 2.3 2.3a1 1 0 0 0 1.4 0l2.1-2.1a1 1 0 0 0 0-1.4L19 4" },
        path { d: "m21 2-9.6 9.6" },
        circle { cx: "7.5", cy: "15.5", r: "5.5" },
    ];
    LAYERS = "Layers" [
        path { d: "M12.83 2.18a2 2 0 0 0-1.66 0L2.6 6.08a1 1 0 0 0 0 1.83l8.58 3.91a2 2 0 0 0 1.66 0l8.58-3.9a1 1 0 0 0 0-1.83z" },
        path { d: "M2 12a1 1 0 0 0 .58.91l8.6 3.91a2 2 0 0 0 1.65 0l8.58-3.9A1 1 0 0 0 22 12" },
        path { d: "M2 17a1 1 0 0 0 .58.91l8.6 3.91a2 2 0 0 0 1.65 0l8.58-3.9A1 1 0 0 0 22 17" },
    ];
    LINK = "Link" [
        path { d: "M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71" },
        path { d: "M14 11a5 5 0 0 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71" },
    ];
    LOADER_CIRCLE = "LoaderCircle" [
        path { d: "M21 12a9 9 0 1 1-6.219-8.56" },
    ] as LOADER_2 = "Loader2";
    LOCK = "Lock" [
        rect { x: "3", y: "11", width: "18", height: "11", rx: "2", ry: "2" },
        path { d: "M7 11V7a5 5 0 0 1 10 0v4" },
    ];
    LOCK_OPEN = "LockOpen" [
        rect { x: "3", y: "11", width: "18", height: "11", rx: "2", ry: "2" },
        path { d: "M7 11V7a5 5 0 0 1 9.9-1" },
    ] as UNLOCK = "Unlock";
    MAIL = "Mail" [
        path { d: "m22 7-8.991 5.727a2 2 0 0 1-2.009 0L2 7" },
        rect { x: "2", y: "4", width: "20", height: "16", rx: "2" },
    ];
    MAP_PIN = "MapPin" [
        path { d: "M20 10c0 4.993-5.539 10.193-7.399 11.799a1 1 0 0 1-1.202 0C9.539 20.193 4 14.993 4 10a8 8 0 0 1 16 0" },
        circle { cx: "12", cy: "10", r: "3" },
    ];
    MENU = "Menu" [
        path { d: "M4 5h16" },
        path { d: "M4 12h16" },
        path { d: "M4 19h16" },
    ];
    MIC = "Mic" [
        path { d: "M12 19v3" },
        path { d: "M19 10v2a7 7 0 0 1-14 0v-2" },
        rect { x: "9", y: "2", width: "6", height: "13", rx: "3" },
    ];
    MINUS = "Minus" [
        path { d: "M5 12h14" },
    ];
    MOON = "Moon" [
        path { d: "M20.985 12.486a9 9 0 1 1-9.473-9.472c.405-.022.617.46.402.803a6 6 0 0 0 8.268 8.268c.344-.215.825-.004.803.401" },
    ];
    PANEL_LEFT = "PanelLeft" [
        rect { x: "3", y: "3", width: "18", height: "18", rx: "2" },
        path { d: "M9 3v18" },
    ] as SIDEBAR = "Sidebar";
    PAUSE = "Pause" [
        rect { x: "14", y: "3", width: "5", height: "18", rx: "1" },
        rect { x: "5", y: "3", width: "5", height: "18", rx: "1" },
    ];
    PENCIL = "Pencil" [
        path { d: "M21.174 6.812a1 1 0 0 0-3.986-3.987L3.842 16.174a2 2 0 0 0-.5.83l-1.321 4.352a.5.5 0 0 0 .623.622l4.353-1.32a2 2 0 0 0 .83-.497z" },
        path { d: "m15 5 4 4" },
    ];
    PHONE = "Phone" [
        path { d: "M13.832 16.568a1 1 0 0 0 1.213-.303l.355-.465A2 2 0 0 1 17 15h3a2 2 0 0 1 2 2v3a2 2 0 0 1-2 2A18 18 0 0 1 2 4a2 2 0 0 1 2-2h3a2 2 0 0 1 2 2v3a2 2 0 0 1-.8 1.6l-.468.351a1 1 0 0 0-.292 1.233 14 14 0 0 0 6.392 6.384" },
    ];
    PLAY = "Play" [
        path { d: "M5 5a2 2 0 0 1 3.008-1.728l11.997 6.998a2 2 0 0 1 .003 3.458l-12 7A2 2 0 0 1 5 19z" },
    ];
    PLUS = "Plus" [
        path { d: "M5 12h14" },
        path { d: "M12 5v14" },
    ];
    PRINTER = "Printer" [
        path { d: "M6 18H4a2 2 0 0 1-2-2v-5a2 2 0 0 1 2-2h16a2 2 0 0 1 2 2v5a2 2 0 0 1-2 2h-2" },
        path { d: "M6 9V3a1 1 0 0 1 1-1h10a1 1 0 0 1 1 1v6" },
        rect { x: "6", y: "14", width: "12", height: "8", rx: "1" },
    ];
    REFRESH_CW = "RefreshCw" [
        path { d: "M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8" },
        path { d: "M21 3v5h-5" },
        path { d: "M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16" },
        path { d: "M8 16H3v5" },
    ];
    ROWS_2 = "Rows2" [
        rect { x: "3", y: "3", width: "18", height: "18", rx: "2" },
        path { d: "M3 12h18" },
    ] as ROWS = "Rows";
    SAVE = "Save" [
        path { d: "M15.2 3a2 2 0 0 1 1.4.6l3.8 3.8a2 2 0 0 1 .6 1.4V19a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z" },
        path { d: "M17 21v-7a1 1 0 0 0-1-1H8a1 1 0 0 0-1 1v7" },
        path { d: "M7 3v4a1 1 0 0 0 1 1h7" },
    ];
    SEARCH = "Search" [
        path { d: "m21 21-4.34-4.34" },
        circle { cx: "11", cy: "11", r: "8" },
    ];
    SEND = "Send" [
        path { d: "M14.536 21.686a.5.5 0 0 0 .937-.024l6.5-19a.496.496 0 0 0-.635-.635l-19 6.5a.5.5 0 0 0-.024.937l7.93 3.18a2 2 0 0 1 1.112 1.11z" },
        path { d: "m21.854 2.147-10.94 10.939" },
    ];
    SERVER = "Server" [
        rect { x: "2", y: "2", width: "20", height: "8", rx: "2", ry: "2" },
        rect { x: "2", y: "14", width: "20", height: "8", rx: "2", ry: "2" },
        line { x1: "6", y1: "6", x2: "6.01", y2: "6" },
        line { x1: "6", y1: "18", x2: "6.01", y2: "18" },
    ];
    SETTINGS = "Settings" [
        path { d: "M9.671 4.136a2.34 2.34 0 0 1 4.659 0 2.34 2.34 0 0 0 3.319 1.915 2.34 2.34 0 0 1 2.33 4.033 2.34 2.34 0 0 0 0 3.831 2.34 2.34 0 0 1-2.33 4.033 2.34 2.34 0 0 0-3.319 1.915 2.34 2.34 0 0 1-4.659 0 2.34 2.34 0 0 0-3.32-1.915 2.34 2.34 0 0 1-2.33-4.033 2.34 2.34 0 0 0 0-3.831A2.34 2.34 0 0 1 6.35 6.051a2.34 2.34 0 0 0 3.319-1.915" },
        circle { cx: "12", cy: "12", r: "3" },
    ];
    SHARE_2 = "Share2" [
        circle { cx: "18", cy: "5", r: "3" },
        circle { cx: "6", cy: "12", r: "3" },
        circle { cx: "18", cy: "19", r: "3" },
        line { x1: "8.59", y1: "13.51", x2: "15.42", y2: "17.49" },
        line { x1: "15.41", y1: "6.51", x2: "8.59", y2: "10.49" },
    ];
    SHIELD = "Shield" [
        path { d: "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z" },
    ];
    SQUARE_CHECK = "SquareCheck" [
        rect { x: "3", y: "3", width: "18", height: "18", rx: "2" },
        path { d: "m9 12 2 2 4-4" },
    ] as CHECK_SQUARE_2 = "CheckSquare2";
    SQUARE_CHECK_BIG = "SquareCheckBig" [
        path { d: "M21 10.656V19a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h12.344" },
        path { d: "m9 11 3 3L22 4" },
    ] as CHECK_SQUARE = "CheckSquare";
    SQUARE_PEN = "SquarePen" [
        path { d: "M12 3H5a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7" },
        path { d: "M18.375 2.625a1 1 0 0 1 3 3l-9.013 9.014a2 2 0 0 1-.853.505l-2.873.84a.5.5 0 0 1-.62-.62l.84-2.873a2 2 0 0 1 .506-.852z" },
    ] as EDIT = "Edit", PEN_BOX = "PenBox", PEN_SQUARE = "PenSquare";
    SQUARE_PLUS = "SquarePlus" [
        rect { x: "3", y: "3", width: "18", height: "18", rx: "2" },
        path { d: "M8 12h8" },
        path { d: "M12 8v8" },
    ] as PLUS_SQUARE = "PlusSquare";
    SQUARE_TERMINAL = "SquareTerminal" [
        path { d: "m7 11 2-2-2-2" },
        path { d: "M11 13h4" },
        rect { x: "3", y: "3", width: "18", height: "18", rx: "2", ry: "2" },
    ] as TERMINAL_SQUARE = "TerminalSquare";
    SQUARE_X = "SquareX" [
        rect { x: "3", y: "3", width: "18", height: "18", rx: "2", ry: "2" },
        path { d: "m15 9-6 6" },
        path { d: "m9 9 6 6" },
    ] as X_SQUARE = "XSquare";
    STAR = "Star" [
        path { d: "M11.525 2.295a.53.53 0 0 1 .95 0l2.31 4.679a2.123 2.123 0 0 0 1.595 1.16l5.166.756a.53.53 0 0 1 .294.904l-3.736 3.638a2.123 2.123 0 0 0-.611 1.878l.882 5.14a.53.53 0 0 1-.771.56l-4.618-2.428a2.122 2.122 0 0 0-1.973 0L6.396 21.01a.53.53 0 0 1-.77-.56l.881-5.139a2.122 2.122 0 0 0-.611-1.879L2.16 9.795a.53.53 0 0 1 .294-.906l5.165-.755a2.122 2.122 0 0 0 1.597-1.16z" },
    ];
    SUN = "Sun" [
        circle { cx: "12", cy: "12", r: "4" },
        path { d: "M12 2v2" },
        path { d: "M12 20v2" },
        path { d: "m4.93 4.93 1.41 1.41" },
        path { d: "m17.66 17.66 1.41 1.41" },
        path { d: "M2 12h2" },
        path { d: "M20 12h2" },
        path { d: "m6.34 17.66-1.41 1.41" },
        path { d: "m19.07 4.93-1.41 1.41" },
    ];
    TAG = "Tag" [
        path { d: "M12.586 2.586A2 2 0 0 0 11.172 2H4a2 2 0 0 0-2 2v7.172a2 2 0 0 0 .586 1.414l8.704 8.704a2.426 2.426 0 0 0 3.42 0l6.58-6.58a2.426 2.426 0 0 0 0-3.42z" },
        circle { cx: "7.5", cy: "7.5", r: ".5" },
    ];
    TERMINAL = "Terminal" [
        path { d: "M12 19h8" },
        path { d: "m4 17 6-6-6-6" },
    ];
    THUMBS_UP = "ThumbsUp" [
        path { d: "M15 5.88 14 10h5.83a2 2 0 0 1 1.92 2.56l-2.33 8A2 2 0 0 1 17.5 22H4a2 2 0 0 1-2-2v-8a2 2 0 0 1 2-2h2.76a2 2 0 0 0 1.79-1.11L12 2a3.13 3.13 0 0 1 3 3.88Z" },
        path { d: "M7 10v12" },
    ];
    TRASH = "Trash" [
        path { d: "M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6" },
        path { d: "M3 6h18" },
        path { d: "M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2" },
    ];
    TRASH_2 = "Trash2" [
        path { d: "M10 11v6" },
        path { d: "M14 11v6" },
        path { d: "M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6" },
        path { d: "M3 6h18" },
        path { d: "M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2" },
    ];
    TRIANGLE_ALERT = "TriangleAlert" [
        path { d: "m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3" },
        path { d: "M12 9v4" },
        path { d: "M12 17h.01" },
    ] as ALERT_TRIANGLE = "AlertTriangle";
    UPLOAD = "Upload" [
        path { d: "M12 3v12" },
        path { d: "m17 8-5-5-5 5" },
        path { d: "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" },
    ];
    USER = "User" [
        path { d: "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2" },
        circle { cx: "12", cy: "7", r: "4" },
    ];
    USERS = "Users" [
        path { d: "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" },
        path { d: "M16 3.128a4 4 0 0 1 0 7.744" },
        path { d: "M22 21v-2a4 4 0 0 0-3-3.87" },
        circle { cx: "9", cy: "7", r: "4" },
    ];
    WIFI = "Wifi" [
        path { d: "M12 20h.01" },
        path { d: "M2 8.82a15 15 0 0 1 20 0" },
        path { d: "M5 12.859a10 10 0 0 1 14 0" },
        path { d: "M8.5 16.429a5 5 0 0 1 7 0" },
    ];
    X = "X" [
        path { d: "M18 6 6 18" },
        path { d: "m6 6 12 12" },
    ];
    ZAP = "Zap" [
        path { d: "M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z" },
    ];
}
