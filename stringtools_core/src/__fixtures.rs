pub const WIKI_BULLETS: &str = "* |** |*** ";
pub const MARKDOWN_BULLETS: &str = "- |  - |    - ";

pub fn wiki_bullet_list() -> &'static str {
	"* item1\n** sub1\n** sub2"
}

pub fn smart_replace_source() -> &'static str {
	"int USER_NAME_ID = 0;\nString userName = \"\";\n\n// Check the user name.\n\nvoid \
	 checkUsername() {\n    if (userName == null) {\n        throw new Exception(\"User name is \
	 invalid. Error: \" + USER_NAME_ID);\n    }\n}"
}

pub fn smart_replace_expected() -> &'static str {
	"int USER_ADDR_ID = 0;\nString userAddr = \"\";\n\n// Check the user addr.\n\nvoid \
	 checkUseraddr() {\n    if (userAddr == null) {\n        throw new Exception(\"User addr is \
	 invalid. Error: \" + USER_ADDR_ID);\n    }\n}"
}

pub fn java_single_field() -> String {
	[
		"    /**",
		"     * The user's awesome name.",
		"     */",
		"    private String userName;",
		"",
		"    public String getUserName() {",
		"        return userName;",
		"    }",
		"",
		"    public void setUserName(String userName) {",
		"        this.userName = userName;",
		"    }",
	]
	.join("\n")
}

pub fn java_single_field_expected() -> String {
	[
		"    /**",
		"     * The user's awesome name.",
		"     */",
		"    private String userName;",
		"",
		"    /**",
		"     * The user's awesome name.",
		"     */",
		"    public String getUserName() {",
		"        return userName;",
		"    }",
		"",
		"    public void setUserName(String userName) {",
		"        this.userName = userName;",
		"    }",
	]
	.join("\n")
}

pub fn java_two_fields() -> String {
	[
		"    /**",
		"     * The list of users.",
		"     */",
		"    private List<String> userList;",
		"",
		"    /**",
		"     * This object's ID.",
		"     */",
		"",
		"    private int id;",
		"",
		"    public List<String> getUserList() {",
		"        return userList;",
		"    }",
		"",
		"    public Integer getId() {",
		"        return id;",
		"    }",
	]
	.join("\n")
}

pub fn java_two_fields_expected() -> String {
	[
		"    /**",
		"     * The list of users.",
		"     */",
		"    private List<String> userList;",
		"",
		"    /**",
		"     * This object's ID.",
		"     */",
		"",
		"    private int id;",
		"",
		"    /**",
		"     * The list of users.",
		"     */",
		"    public List<String> getUserList() {",
		"        return userList;",
		"    }",
		"",
		"    /**",
		"     * This object's ID.",
		"     */",
		"    public Integer getId() {",
		"        return id;",
		"    }",
	]
	.join("\n")
}

pub fn actionscript_field() -> String {
	[
		"    /**",
		"     * The user's awesome name.",
		"     */",
		"    private var _userName:String;",
		"",
		"    public function get userName():String {",
		"        return _userName;",
		"    }",
		"",
		"    public function set userName(userName:String):void {",
		"        _userName = userName;",
		"    }",
	]
	.join("\n")
}

pub fn actionscript_field_expected() -> String {
	[
		"    /**",
		"     * The user's awesome name.",
		"     */",
		"    private var _userName:String;",
		"",
		"    /**",
		"     * The user's awesome name.",
		"     */",
		"    public function get userName():String {",
		"        return _userName;",
		"    }",
		"",
		"    public function set userName(userName:String):void {",
		"        _userName = userName;",
		"    }",
	]
	.join("\n")
}

pub fn documented_method() -> &'static str {
	"/**\n * Returns the {@link User} for <p/>an id.\n * @param id the [id] to look up\n * @throws \
	 NotFound if missing\n * @see Users#find\n */\npublic User find(int id) throws NotFound {\n\treturn \
	 users.get(id);\n}\n"
}
